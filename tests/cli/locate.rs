use anyhow::Result;

use crate::{CliTest, stdout};

#[test]
fn test_locate_leaf() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["locate", "tour.end"])?;

    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("en.json:4"));

    Ok(())
}

#[test]
fn test_locate_partial_path() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let out = stdout(&test.run(&["locate", "menu"])?);

    assert!(out.contains("en.json:6 (partial)"));

    Ok(())
}

#[test]
fn test_locate_in_other_locale() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let out = stdout(&test.run(&["locate", "extra", "--locale", "de"])?);

    assert!(out.trim_end().ends_with("de.json:5"));

    Ok(())
}

#[test]
fn test_locate_from_source_position() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    test.write_file("src/app.html", "<h1>{{ 'menu.close' | translate }}</h1>\n")?;

    let out = stdout(&test.run(&["locate", "src/app.html:1:12"])?);

    assert!(out.trim_end().ends_with("en.json:8"));

    Ok(())
}

#[test]
fn test_locate_not_found() -> Result<()> {
    let test = CliTest::with_catalogs()?;

    let output = test.run(&["locate", "tour.middle"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Could not find 'tour.middle' in en.json"));

    Ok(())
}

#[test]
fn test_locate_with_project_path_option() -> Result<()> {
    let test = CliTest::with_catalogs()?;
    let project = test.root().to_string_lossy().to_string();

    let output = test.run(&["locate", "tour.end", "--path", &project])?;

    assert!(output.status.success());
    assert!(stdout(&output).trim_end().ends_with("en.json:4"));

    Ok(())
}
