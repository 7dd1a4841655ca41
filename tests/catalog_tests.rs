//! Integration tests for categories, browse and search commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{install_fixture_categories, tagsmith_cmd};

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();
    install_fixture_categories(temp.path());
    temp
}

#[test]
fn test_categories_sorted() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("character\nquality\n");
}

#[test]
fn test_categories_empty_catalog() {
    let temp = TempDir::new().unwrap();
    tagsmith_cmd().arg("init").arg(temp.path()).assert().success();

    tagsmith_cmd()
        .current_dir(temp.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories found"));
}

#[test]
fn test_browse_category_keeps_file_order() {
    let temp = workspace();

    let output = tagsmith_cmd()
        .current_dir(temp.path())
        .args(["browse", "character"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let headers: Vec<&str> = stdout.lines().filter(|l| l.starts_with("## ")).collect();
    assert_eq!(headers, vec!["## hair", "## eyes", "## ears"]);
    assert!(stdout.contains("  长发 (long_hair)\n  短发 (short_hair)\n  双马尾 (twintails)\n"));
}

#[test]
fn test_browse_single_group() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["browse", "quality", "--group", "negative"])
        .assert()
        .success()
        .stdout("## negative\n  模糊 (blurry)\n  lowres (lowres)\n");
}

#[test]
fn test_browse_unknown_group() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["browse", "character", "--group", "nosuch"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Group not found: 'nosuch' in category 'character'"));
}

#[test]
fn test_browse_missing_category() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["browse", "scenery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: scenery"));
}

#[test]
fn test_search_fuzzy_default() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "HAIR"])
        .assert()
        .success()
        .stdout("1. 长发 (long_hair)\n2. 短发 (short_hair)\n");
}

#[test]
fn test_search_exact_by_display_label() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "猫耳", "--mode", "exact"])
        .assert()
        .success()
        .stdout("1. 猫耳 (cat_ears)\n");
}

#[test]
fn test_search_regex_with_limit() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "^(blue|red)_eyes$", "--mode", "regex", "--limit", "1"])
        .assert()
        .success()
        .stdout("1. 蓝眼睛 (blue_eyes)\n");
}

#[test]
fn test_search_no_results() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "wings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No candidates found"));
}

#[test]
fn test_search_invalid_regex_and_mode() {
    let temp = workspace();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "(unclosed", "--mode", "regex"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid pattern"));

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "hair", "--mode", "wild"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid search mode"));
}

#[test]
fn test_malformed_category_file() {
    let temp = workspace();
    std::fs::write(temp.path().join("categories/broken.json"), r#"{"g": ["x"]}"#).unwrap();

    tagsmith_cmd()
        .current_dir(temp.path())
        .args(["search", "hair"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken: group 'g' must be an object"));
}
