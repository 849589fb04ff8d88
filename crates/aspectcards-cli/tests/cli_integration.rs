//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command that logs into a temporary directory
fn cli_cmd(logs_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aspectcards").expect("Failed to find aspectcards binary");
    cmd.arg("--logs-dir").arg(logs_dir.path());
    cmd
}

fn write_catalog(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).unwrap();
    path
}

const SMALL_CATALOG: &str = r#"{
    "aspects": [{
        "name": "Focus",
        "actions": ["Aim", "Watch"],
        "icon": "mingcute:eye-line",
        "perception": "a detail",
        "style": "aspects-green"
    }]
}"#;

// ============================================================================
// Export Command Tests
// ============================================================================

#[test]
fn test_export_writes_all_files() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cli_cmd(&logs)
        .args(["export", "--target-size", "400", "--out"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 9 images to"))
        .stdout(predicate::str::contains("cards/00_aggression.png"));

    for name in [
        "aspect-cards-preview.png",
        "aspect-cards-instincts.png",
        "aspect-cards-instincts-split.png",
        "nature-art-cards.png",
    ] {
        assert!(out.path().join(name).exists(), "missing {}", name);
    }
    assert!(out.path().join("cards").join("04_card.png").exists());
}

#[test]
fn test_export_twice_succeeds() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    for _ in 0..2 {
        cli_cmd(&logs)
            .args(["export", "--target-size", "300", "--out"])
            .arg(out.path())
            .assert()
            .success();
    }
}

#[test]
fn test_export_with_custom_catalog() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let catalog = write_catalog(&out, SMALL_CATALOG);
    let target = out.path().join("sheets");

    cli_cmd(&logs)
        .args(["export", "--target-size", "300", "--catalog"])
        .arg(&catalog)
        .arg("--out")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 5 images"));

    assert!(target.join("cards").join("00_focus.png").exists());
    assert!(!target.join("nature-art-cards.png").exists());
}

#[test]
fn test_zero_target_size_rejected() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cli_cmd(&logs)
        .args(["export", "--target-size", "0", "--out"])
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--target-size"));

    assert!(!out.path().join("aspect-cards-preview.png").exists());
}

#[test]
fn test_export_with_missing_font_dir() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cli_cmd(&logs)
        .args(["export", "--target-size", "300", "--font-dir"])
        .arg(out.path().join("no-fonts-here"))
        .arg("--out")
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 9 images"));
}

#[test]
fn test_export_into_file_path_fails() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let blocker = out.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    cli_cmd(&logs)
        .args(["export", "--out"])
        .arg(&blocker)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open output directory"));
}

#[test]
fn test_export_writes_diagnostics_log() {
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    cli_cmd(&logs)
        .args(["-v", "export", "--target-size", "300", "--out"])
        .arg(out.path())
        .assert()
        .success();

    let has_log = std::fs::read_dir(logs.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .any(|e| e.file_name().to_string_lossy().ends_with("_cli.jsonl"));
    assert!(has_log);
}

// ============================================================================
// List and Check Command Tests
// ============================================================================

#[test]
fn test_list_builtin() {
    let logs = TempDir::new().unwrap();

    cli_cmd(&logs)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aspects (4):"))
        .stdout(predicate::str::contains("Actions: Dash, Hold, Strike"))
        .stdout(predicate::str::contains("Nature Arts (11):"))
        .stdout(predicate::str::contains("Files (9):"))
        .stdout(predicate::str::contains("aspect-cards-instincts-split.png"));
}

#[test]
fn test_list_shows_linked_arts() {
    let logs = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(
        &dir,
        r#"{
            "aspects": [{
                "name": "Focus",
                "actions": ["Aim"],
                "icon": "mingcute:eye-line",
                "perception": "a detail",
                "style": "aspects-green",
                "arts": ["Flow", "Ember"]
            }],
            "arts": [
                {"name": "Ember", "description": "Heat", "icon": "mingcute:flame-line", "style": "red"},
                {"name": "Flow", "description": "Water", "icon": "mingcute:drop-line", "style": "blue"}
            ]
        }"#,
    );

    cli_cmd(&logs)
        .args(["list", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arts: Flow, Ember"))
        .stdout(predicate::str::contains("Nature Arts (2):"));
}

#[test]
fn test_list_builtin_has_no_art_links() {
    let logs = TempDir::new().unwrap();

    cli_cmd(&logs)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("    Arts:").not());
}

#[test]
fn test_check_valid_catalog() {
    let logs = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(&dir, SMALL_CATALOG);

    cli_cmd(&logs)
        .args(["check", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog OK: 1 aspects, 0 arts, 5 files per export"));
}

#[test]
fn test_check_rejects_unknown_art() {
    let logs = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let catalog = write_catalog(
        &dir,
        r#"{
            "aspects": [{
                "name": "Focus",
                "actions": ["Aim"],
                "icon": "mingcute:eye-line",
                "perception": "a detail",
                "style": "aspects-green",
                "arts": ["Ember"]
            }]
        }"#,
    );

    cli_cmd(&logs)
        .args(["check", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown art 'Ember'"));
}

#[test]
fn test_check_requires_catalog() {
    let logs = TempDir::new().unwrap();

    cli_cmd(&logs).arg("check").assert().failure();
}
