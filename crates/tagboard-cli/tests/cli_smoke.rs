use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("race.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_lays_out_fixture_snapshot() {
    let exe = assert_cmd::cargo_bin!("tagboard-cli");
    let output = Command::new(exe)
        .args(["layout", fixture().to_string_lossy().as_ref()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let layout: serde_json::Value = serde_json::from_slice(&output).expect("layout JSON");
    // Orphan promotion: Race.Dwarf.Hill shares the root row with Race.
    assert_eq!(layout["boxes"]["Race"]["y"], serde_json::json!(40.0));
    assert_eq!(
        layout["boxes"]["Race.Dwarf.Hill"]["y"],
        serde_json::json!(40.0)
    );
    assert_eq!(layout["boxes"]["Race.Elf.Wood"]["y"], serde_json::json!(400.0));
}

#[test]
fn cli_renders_svg_to_out_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("race.svg");

    let exe = assert_cmd::cargo_bin!("tagboard-cli");
    Command::new(exe)
        .args([
            "render",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.starts_with("<svg "));
    assert_eq!(svg.matches("<rect").count(), 5);
    assert_eq!(svg.matches("<line").count(), 3);
}

#[test]
fn cli_prune_deletes_prefix_subtree() {
    let exe = assert_cmd::cargo_bin!("tagboard-cli");
    let output = Command::new(exe)
        .args([
            "prune",
            "--tag",
            "Race.Elf",
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let survivors: serde_json::Value = serde_json::from_slice(&output).expect("snapshot JSON");
    let tags: Vec<&str> = survivors
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["full_tag"].as_str().unwrap())
        .collect();
    assert_eq!(tags, ["Race", "Race.Orc", "Race.Dwarf.Hill"]);
}

#[test]
fn cli_outline_skips_orphan_gap_but_keeps_segments() {
    let exe = assert_cmd::cargo_bin!("tagboard-cli");
    let output = Command::new(exe)
        .args(["outline", fixture().to_string_lossy().as_ref()])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).expect("utf8");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, ["Elf", "  Wood", "Orc", "Dwarf", "  Hill"]);
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("tagboard-cli");
    Command::new(exe)
        .args(["layout", "--no-such-flag"])
        .assert()
        .failure()
        .code(2);
}
