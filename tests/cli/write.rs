use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CONFIG, CliTest, stdout};

#[test]
fn test_create_adds_nested_key() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["create", "tour.skip", "Skip"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("added tour.skip in en"));
    let en = test.read_json("i18n/en.json")?;
    assert_eq!(en["tour"]["skip"], "Skip");
    assert_eq!(en["tour"]["start"], "Start");

    Ok(())
}

#[test]
fn test_create_refuses_existing_value() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    let before = test.read_file("i18n/en.json")?;

    let output = test.run(&["create", "tour.start", "Begin"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("The path 'tour.start' already exists"));
    assert!(out.contains("glossa change"));
    assert_eq!(test.read_file("i18n/en.json")?, before);

    Ok(())
}

#[test]
fn test_create_refuses_leaf_in_the_way() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["create", "unused.child", "x"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_json("i18n/en.json")?["unused"], "Never shown");

    Ok(())
}

#[test]
fn test_change_replaces_value() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["change", "tour.start", "Begin"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("updated tour.start in en"));
    assert_eq!(test.read_json("i18n/en.json")?["tour"]["start"], "Begin");

    Ok(())
}

#[test]
fn test_change_other_locale() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["change", "tour.end", "Ende", "--locale", "de"])?;

    assert!(output.status.success());
    assert_eq!(
        test.read_json("i18n/de.json")?,
        json!({ "tour": { "start": "Los", "end": "Ende" }, "extra": "Nur deutsch" })
    );

    Ok(())
}

#[test]
fn test_create_flat_keys_sorted() -> Result<()> {
    let test = CliTest::with_file(
        ".glossarc.json",
        r#"{
  "translationFiles": [{ "locale": "en", "path": "i18n/en.json" }],
  "flatKeys": true,
  "sortKeys": true,
  "jsonIndentation": 4
}"#,
    )?;
    test.write_file("i18n/en.json", "{\"z.last\": \"Z\"}\n")?;

    let output = test.run(&["create", "a.first", "A"])?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("i18n/en.json")?,
        "{\n    \"a.first\": \"A\",\n    \"z.last\": \"Z\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_create_from_source_position() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("src/app.ts", "const label = t('tour.pause');\n")?;

    let output = test.run(&["create", "src/app.ts:1:20", "Pause"])?;

    assert!(output.status.success());
    assert_eq!(test.read_json("i18n/en.json")?["tour"]["pause"], "Pause");

    Ok(())
}

#[test]
fn test_create_invalid_identifier() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["create", "has space", "x"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("not a valid translation identifier"));

    Ok(())
}

#[test]
fn test_create_creates_missing_catalog() -> Result<()> {
    let test = CliTest::with_file(".glossarc.json", CONFIG)?;
    test.write_file("i18n/en.json", "{\"a\": \"A\"}")?;

    let output = test.run(&["create", "b", "B", "--locale", "de"])?;

    assert!(output.status.success());
    assert_eq!(test.read_json("i18n/de.json")?, json!({ "b": "B" }));

    Ok(())
}

#[test]
fn test_create_undeclared_locale_fails() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["create", "a", "A", "--locale", "fr"])?;

    assert_eq!(output.status.code(), Some(2));

    Ok(())
}
