use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["language"], "en");
    assert_eq!(parsed["recursive"], true);
    assert_eq!(parsed["extensions"], serde_json::json!(["html", "js"]));
    assert_eq!(parsed["marker"], "translate");
    assert_eq!(parsed["catalogFile"], "translations.json");
    assert!(
        parsed.get("translateTo").is_some(),
        "Config should have 'translateTo' field"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert_eq!(stdout(&output), "✓ Created .xlocalizerc.json\n");

    let content = test.read_file(".xlocalizerc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xlocalizerc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".xlocalizerc.json already exists"));
    assert_eq!(test.read_file(".xlocalizerc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("app.js", "translate('Hello');")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(test.read_json("translations.json")?, serde_json::json!({ "Hello": {} }));

    Ok(())
}
