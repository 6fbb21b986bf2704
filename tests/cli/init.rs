use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn parse_config(content: &str) -> Result<Value> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "translationFiles",
        "flatKeys",
        "analysisExtensions",
        "jsonIndentation",
        "ignores",
        "sourceRoot",
    ] {
        assert!(parsed.get(field).is_some(), "Config should have '{}'", field);
    }
    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(parsed)
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("Created .glossarc.json"));
    let config = parse_config(&test.read_file(".glossarc.json")?)?;
    assert_eq!(config["translationFiles"], json!([]));

    Ok(())
}

#[test]
fn test_init_discovers_catalogs() -> Result<()> {
    let test = CliTest::with_file("src/assets/i18n/en.json", "{}")?;
    test.write_file("src/assets/i18n/de.json", "{}")?;
    test.write_file("node_modules/pkg/i18n/fr.json", "{}")?;
    test.write_file("src/app.json", "{}")?;

    let output = test.run(&["init"])?;

    assert!(output.status.success());
    let config = parse_config(&test.read_file(".glossarc.json")?)?;
    assert_eq!(
        config["translationFiles"],
        json!([
            { "locale": "de", "path": "src/assets/i18n/de.json" },
            { "locale": "en", "path": "src/assets/i18n/en.json" }
        ])
    );

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", "{}")?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains(".glossarc.json already exists"));
    assert_eq!(test.read_file(".glossarc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{ "greeting": "Hello" }"#)?;
    test.write_file("src/app.ts", "t('greeting');\n")?;

    test.run(&["init"])?;
    let output = test.run(&["analyse"])?;

    assert!(
        output.status.success(),
        "analyse should work with the initialized config. stdout: {}",
        stdout(&output)
    );
    assert!(test.root().join(".glossarc.json").exists());

    Ok(())
}
