use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let content = test.read_file(".statici18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["localeDir"], "locale");
    assert_eq!(parsed["defaultLocale"], "en");
    assert_eq!(parsed["includes"]["**/*.js"], "javascript");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".statici18nrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(test.read_file(".statici18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_app()?;

    test.command().arg("init").output()?;

    let output = test.command().arg("build").output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("build/fr/script.js").exists());

    Ok(())
}
