use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, SCRIPT, stderr, stdout};

#[test]
fn test_build_translates_in_place() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test.command().arg("build").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    // default locale knocks the gettext calls out at the root
    assert_eq!(
        test.read_file("build/script.js")?,
        "window.alert('Hello World');\n"
    );
    assert_eq!(
        test.read_file("build/fr/script.js")?,
        "window.alert('Bonjour tout le monde');\n"
    );
    assert_eq!(
        test.read_file("build/pt-br/script.js")?,
        "window.alert('Olá mundo');\n"
    );
    assert!(!test.root().join("build/templates").exists());
    assert!(stdout(&output).contains("Wrote 3 files for 1 source file in 3 locales"));

    Ok(())
}

#[test]
fn test_build_separate_output_root() -> Result<()> {
    let test = CliTest::with_app()?;
    test.write_file("build/js/nested.js", "var t = gettext(\"Hello World\");")?;
    test.write_file("build/style.css", "body {}")?;

    let output = test
        .command()
        .args(["build", "--output-root", "dist"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("build/script.js")?, SCRIPT);
    assert_eq!(test.read_file("dist/js/nested.js")?, "var t = 'Hello World';");
    assert_eq!(
        test.read_file("dist/fr/js/nested.js")?,
        "var t = 'Bonjour tout le monde';"
    );
    assert!(!test.root().join("dist/style.css").exists());

    Ok(())
}

#[test]
fn test_build_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::with_app()?;

    let output = test.command().args(["build", "--dry-run"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(test.read_file("build/script.js")?, SCRIPT);
    assert!(!test.root().join("build/fr").exists());
    assert!(stdout(&output).contains("Would write 3 files"));

    Ok(())
}

#[test]
fn test_build_with_config_file() -> Result<()> {
    let test = CliTest::with_app()?;
    test.write_file(
        ".statici18nrc.json",
        r#"{ "sourceRoot": "build", "outputRoot": "public", "ignores": ["vendor/**"] }"#,
    )?;
    test.write_file("build/vendor/lib.js", "gettext('Hello World')")?;

    let output = test.command().arg("build").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("public/script.js")?,
        "window.alert('Hello World');\n"
    );
    assert_eq!(
        test.read_file("public/pt-br/script.js")?,
        "window.alert('Olá mundo');\n"
    );
    assert!(!test.root().join("public/vendor").exists());

    Ok(())
}

#[test]
fn test_build_configured_default_locale() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("fr", &[("Hello World", "Bonjour tout le monde")])?;
    test.write_catalog("pt_BR", &[("Hello World", "Olá mundo")])?;
    test.write_file("build/script.js", SCRIPT)?;

    let output = test
        .command()
        .args(["build", "--default-locale", "fr", "--output-root", "out"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        test.read_file("out/script.js")?,
        "window.alert('Bonjour tout le monde');\n"
    );
    assert!(!test.root().join("out/fr").exists());
    assert!(test.root().join("out/pt-br/script.js").exists());

    Ok(())
}

#[test]
fn test_build_missing_catalog_is_a_warning() -> Result<()> {
    let test = CliTest::with_app()?;
    test.write_file("locale/ja/README", "catalog pending")?;

    let output = test.command().arg("build").output()?;
    assert_eq!(output.status.code(), Some(1));

    assert!(stderr(&output).contains("unable to find a translation catalog for 'ja'"));
    assert_eq!(
        test.read_file("build/ja/script.js")?,
        "window.alert('Hello World');\n"
    );
    assert_eq!(
        test.read_file("build/fr/script.js")?,
        "window.alert('Bonjour tout le monde');\n"
    );

    Ok(())
}

#[test]
fn test_build_missing_locale_dir() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("build/script.js", SCRIPT)?;

    let output = test.command().arg("build").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("locale directory"));
    assert!(stderr(&output).contains("does not exist"));
    assert_eq!(test.read_file("build/script.js")?, SCRIPT);

    Ok(())
}

#[test]
fn test_build_without_input_fails() -> Result<()> {
    let test = CliTest::with_app()?;
    std::fs::remove_file(test.root().join("build/script.js"))?;

    let output = test.command().arg("build").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No files to translate"));
    assert!(stderr(&output).contains("no input received"));

    Ok(())
}

#[test]
fn test_build_incomplete_catalog_header_is_a_warning() -> Result<()> {
    let test = CliTest::with_app()?;
    test.write_file(
        "locale/fr/LC_MESSAGES/messages.po",
        "msgid \"\"\nmsgstr \"\"\n\"Content-Type: text/plain; charset=UTF-8\\n\"\n\n\
         msgid \"Hello World\"\nmsgstr \"Bonjour tout le monde\"\n",
    )?;

    let output = test.command().arg("build").output()?;
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("missing header field(s)"));
    assert!(err.contains("unable to find a translation catalog for 'fr'"));
    assert_eq!(
        test.read_file("build/fr/script.js")?,
        "window.alert('Hello World');\n"
    );
    assert_eq!(
        test.read_file("build/pt-br/script.js")?,
        "window.alert('Olá mundo');\n"
    );

    Ok(())
}

#[test]
fn test_build_marker_free_file_ignores_missing_catalog() -> Result<()> {
    let test = CliTest::new()?;
    test.write_catalog("fr", &[("Hello World", "Bonjour tout le monde")])?;
    test.write_file("locale/ja/README", "catalog pending")?;
    test.write_file("build/plain.js", "console.log('no markers here');\n")?;

    let output = test.command().arg("build").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert!(!stderr(&output).contains("unable to find a translation catalog"));
    assert_eq!(
        test.read_file("build/ja/plain.js")?,
        "console.log('no markers here');\n"
    );

    Ok(())
}
