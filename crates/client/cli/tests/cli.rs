//! Runs the `pharmacy` binary against a throwaway data directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn fixture() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let data = root.path().join("data");
    write(
        &data.join("skills/pharmacy_special.json"),
        r#"{
            "base_difficulty_by_level": {"0": 0, "5": 50, "10": 100},
            "max_potions_by_level": {"0": 1, "5": 6, "10": 10},
            "base_difficulty_by_item_id": {"12428": 280, "12436": 400}
        }"#,
    );
    write(
        &data.join("catalog/items.json"),
        r#"[
            {"id": 12428, "name": "Condensed White Potion", "type": "final", "recipe": "10_713+10_509"},
            {"id": 12436, "name": "Blue Herb Potion", "type": "final", "recipe": "2_713"},
            {"id": 713, "name": "Empty Bottle", "type": "material"},
            {"id": 509, "name": "White Herb", "type": "material"}
        ]"#,
    );
    root
}

fn run(root: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pharmacy"))
        .args(args)
        .arg("--data-dir")
        .arg(root.path().join("data"))
        .arg("--user-dir")
        .arg(root.path().join("user"))
        .env("RUST_LOG", "warn")
        .env_remove("PHARMACY_LOG_DIR")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn outcomes_table() {
    let root = fixture();
    let out = stdout(&run(&root, &["outcomes"]));

    assert!(out.contains("cap 10"));
    assert!(out.contains("outcomes 847 (420..=570)"));
    assert!(out.contains("MAX-6"));
    assert!(out.contains("Condensed White Potion"));
    assert!(out.contains("Blue Herb Potion"));
}

#[test]
fn outcomes_rejects_bad_level() {
    let root = fixture();
    assert!(!run(&root, &["outcomes", "--level", "11"]).status.success());
}

#[test]
fn costs_without_prices() {
    let root = fixture();
    let out = stdout(&run(&root, &["costs", "--level", "5"]));

    assert!(out.contains("prices: empty"));
    assert!(out.contains("Empty Bottle×10, White Herb×10"));
}

#[test]
fn set_price_then_list() {
    let root = fixture();
    stdout(&run(&root, &["set-price", "empty bottle", "5"]));
    stdout(&run(&root, &["set-price", "509", "3"]));

    let prices = stdout(&run(&root, &["prices"]));
    assert!(prices.contains("source: user"));
    assert!(prices.contains("Empty Bottle"));
    assert!(prices.contains("White Herb"));

    let costs = stdout(&run(&root, &["costs"]));
    assert!(costs.lines().any(|l| l.starts_with("Condensed White Potion") && l.contains(" 80 ")));
}

#[test]
fn unknown_item_name_fails() {
    let root = fixture();
    assert!(!run(&root, &["set-price", "Nothing", "1"]).status.success());
}

#[test]
fn missing_rules_fail() {
    let root = tempfile::tempdir().unwrap();
    assert!(!run(&root, &["outcomes"]).status.success());
}

#[test]
fn profile_import_then_export() {
    let root = fixture();
    let source = root.path().join("incoming.json");
    write(&source, r#"{"stats": {"int_stat": 150}, "buffs": {"gloria": true}}"#);
    stdout(&run(&root, &["profile", "--import", source.to_str().unwrap()]));

    let exported = root.path().join("out/profile.json");
    let out = stdout(&run(&root, &["profile", "--export", exported.to_str().unwrap()]));
    assert!(out.contains("INT  150 ->  150"));
    assert!(out.contains("Buffs: Glória"));

    let written = fs::read_to_string(&exported).unwrap();
    assert!(written.contains("\"int_stat\": 150"));
}
