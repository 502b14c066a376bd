use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_lookup_translation() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test
        .command()
        .args(["lookup", "fr", "Hello World"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Bonjour tout le monde\n");

    Ok(())
}

#[test]
fn test_lookup_falls_back_to_source() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test
        .command()
        .args(["lookup", "fr", "Goodbye"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Goodbye\n");

    Ok(())
}

#[test]
fn test_lookup_unknown_locale() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test
        .command()
        .args(["lookup", "ja", "Hello World"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unable to find a translation catalog for 'ja'"));

    Ok(())
}

#[test]
fn test_lookup_empty_source() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test.command().args(["lookup", "fr", ""]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("empty source string"));

    Ok(())
}

#[test]
fn test_lookup_locale_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "i18n/de/LC_MESSAGES/messages.po",
        r#"msgid ""
msgstr ""
"Project-Id-Version: app 1.0\n"
"POT-Creation-Date: 2024-01-01 00:00+0000\n"
"PO-Revision-Date: 2024-01-02 00:00+0000\n"
"Language-Team: German\n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Language: de\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"

msgid "Hello World"
msgstr "Hallo Welt"
"#,
    )?;

    let output = test
        .command()
        .args(["lookup", "de", "Hello World", "--locale-dir", "i18n"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hallo Welt\n");

    Ok(())
}
