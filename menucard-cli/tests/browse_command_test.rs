//! Integration tests for the `menucard` binary
//!
//! Each test runs the built binary against the bundled sample catalog
//! or a throwaway catalog written to a temp directory.

use anyhow::Result;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the sample catalog shipped with the repository
fn sample_catalog() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop();
    path.join("data").join("menu.yaml")
}

/// Run menucard with the given catalog and arguments
fn run_menucard(catalog: &PathBuf, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_menucard"))
        .arg("--catalog")
        .arg(catalog)
        .arg("--no-color")
        .args(args)
        .env_remove("MENUCARD_CATALOG")
        .output()?;
    Ok(output)
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn json_item_names(output: &Output) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names = value["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    Ok(names)
}

#[test]
fn test_browse_all_json_lists_every_item() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["browse", "--json"])?;
    assert!(output.status.success());

    let names = json_item_names(&output)?;
    assert_eq!(names.len(), 11);
    assert_eq!(names.first().map(String::as_str), Some("Bruschetta"));
    assert_eq!(names.last().map(String::as_str), Some("Limonata"));
    Ok(())
}

#[test]
fn test_browse_combines_search_and_diet() -> Result<()> {
    let output = run_menucard(
        &sample_catalog(),
        &["browse", "--search", "TOMATO", "--diet", "vegan", "--json"],
    )?;
    assert!(output.status.success());
    assert_eq!(
        json_item_names(&output)?,
        vec!["Bruschetta", "Penne Arrabbiata"]
    );
    Ok(())
}

#[test]
fn test_browse_unknown_category_is_empty_not_failure() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["browse", "--category", "brunch"])?;
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("No items match your search"));
    Ok(())
}

#[test]
fn test_browse_empty_result_offers_clearing_filters() -> Result<()> {
    let output = run_menucard(
        &sample_catalog(),
        &["browse", "--category", "desserts", "--search", "pizza"],
    )?;
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("No items match your search"));
    assert!(stdout.contains("Clear filters"));
    Ok(())
}

#[test]
fn test_categories_starts_with_all_items() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["categories", "--json"])?;
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(rows[0]["id"], "all");
    assert_eq!(rows[0]["name"], "All Items");
    assert_eq!(rows[0]["items"], 11);
    assert_eq!(rows[1]["id"], "starters");
    Ok(())
}

#[test]
fn test_tags_in_first_seen_order() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["tags", "--json"])?;
    assert!(output.status.success());

    let tags: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = tags
        .as_array()
        .map(|a| a.iter().filter_map(|t| t["tag"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["vegetarian", "vegan", "spicy", "gluten-free"]);
    assert_eq!(tags[2]["badge"], "red");
    Ok(())
}

#[test]
fn test_show_item_detail() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["show", "all", "bruschetta"])?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Bruschetta"));
    assert!(stdout.contains("Ingredients: Sourdough"));
    assert!(stdout.contains("[vegetarian] [vegan]"));
    assert!(stdout.contains("$9"));
    Ok(())
}

#[test]
fn test_show_missing_item_fails() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["show", "drinks", "Tiramisu"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Tiramisu"));
    Ok(())
}

#[test]
fn test_info_prints_restaurant_block() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["info"])?;
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Trattoria Bella"));
    assert!(stdout.contains("WiFi:    Bella-Guest"));
    assert!(stdout.contains("Open Daily: 11:30 AM - 10:00 PM"));
    Ok(())
}

#[test]
fn test_validate_rejects_reserved_category() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("menu.yaml");
    std::fs::write(
        &path,
        "restaurant: { name: Broken }\ncategories:\n  - { id: all, name: Everything }\n",
    )?;

    let output = run_menucard(&path, &["validate"])?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("reserved"));
    Ok(())
}

#[test]
fn test_validate_reports_counts() -> Result<()> {
    let output = run_menucard(&sample_catalog(), &["validate", "--json"])?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["valid"], true);
    assert_eq!(report["categories"], 4);
    assert_eq!(report["items"], 11);
    assert_eq!(report["source"], "--catalog");
    Ok(())
}
