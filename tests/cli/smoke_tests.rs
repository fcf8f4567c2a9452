use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vault_manifest"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("vault_manifest"))
        .stdout(predicate::str::contains("visualisations"));
}

#[test]
fn vault_run_prints_summary() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/papers/x.pdf", 2048);
    ws.create_file("vault/readme.txt", 10);

    bin()
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File structure saved to file_structure.json"))
        .stdout(predicate::str::contains("- papers: 1 files"))
        .stdout(predicate::str::contains("Total: 2 files"))
        .stderr(predicate::str::contains("✓ papers/x.pdf"));

    assert_eq!(ws.manifest()["papers"][0]["size"], "2.0 KB");
}

#[test]
fn missing_vault_fails_without_output() {
    let ws = TempWorkspace::new();

    bin()
        .arg("vault")
        .current_dir(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("Please create a 'vault' folder"));

    assert!(!ws.manifest_path().exists());
}

#[test]
fn empty_vault_succeeds_without_output() {
    let ws = TempWorkspace::new();
    ws.create_dir("vault");

    bin()
        .current_dir(ws.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No folders or files found"));

    assert!(!ws.manifest_path().exists());
}

#[test]
fn visualisations_copies_from_source() {
    let source = TempWorkspace::new();
    source.create_file("plots/a.html", 3);
    let ws = TempWorkspace::new();

    bin()
        .args(["visualisations", "--source"])
        .arg(source.path())
        .args(["--timestamp-format", "iso8601", "--quiet"])
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let manifest = ws.manifest();
    assert_eq!(manifest["plots"][0]["path"], "visualisations/plots/a.html");
    assert_eq!(manifest["plots"][0]["modified"].as_str().unwrap().len(), 19);
}

#[test]
fn visualisations_missing_source_fails() {
    let ws = TempWorkspace::new();

    bin()
        .args(["visualisations", "--source", "does-not-exist"])
        .current_dir(ws.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("copy source directory not found"));

    assert!(!ws.path().join("visualisations").exists());
    assert!(!ws.manifest_path().exists());
}
