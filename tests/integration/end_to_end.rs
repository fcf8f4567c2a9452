// tests/integration/end_to_end.rs
use std::{fs, path::PathBuf};

use serde_json::{Value, json};
use vault_manifest::{
    app,
    config::{Config, ConfigBuilder},
};
use vault_manifest_domain::Variant;
use vault_manifest_shared_kernel::{DomainError, ManifestError, TimestampStyle};
use vault_manifest_usecase::Outcome;

#[path = "../common/mod.rs"]
mod common;
use common::TempWorkspace;

fn vault_config(ws: &TempWorkspace) -> Config {
    ConfigBuilder::default()
        .variant(Variant::Vault)
        .root(ws.path().join("vault"))
        .output(ws.manifest_path())
        .build()
        .unwrap()
}

fn visualisations_config(ws: &TempWorkspace, source: Option<PathBuf>) -> Config {
    ConfigBuilder::default()
        .variant(Variant::Visualisations)
        .root(ws.path().join("visualisations"))
        .output(ws.manifest_path())
        .copy_source(source)
        .build()
        .unwrap()
}

fn without_modified(manifest: &Value) -> Value {
    let mut manifest = manifest.clone();
    for files in manifest.as_object_mut().unwrap().values_mut() {
        for file in files.as_array_mut().unwrap() {
            file.as_object_mut().unwrap().remove("modified");
        }
    }
    manifest
}

/// `dd/mm/yyyy, hh:mm:ss AM|PM`
fn is_day_first(stamp: &str) -> bool {
    let bytes = stamp.as_bytes();
    stamp.len() == 23
        && [2, 5].iter().all(|&i| bytes[i] == b'/')
        && &stamp[10..12] == ", "
        && [14, 17].iter().all(|&i| bytes[i] == b':')
        && (stamp.ends_with(" AM") || stamp.ends_with(" PM"))
        && [0, 1, 3, 4, 6, 7, 8, 9, 12, 13, 15, 16, 18, 19]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

fn domain_error(err: &anyhow::Error) -> Option<&DomainError> {
    err.downcast_ref::<ManifestError>().and_then(ManifestError::domain)
}

#[test]
fn papers_and_readme_produce_two_groups() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/papers/x.pdf", 2048);
    ws.create_file("vault/readme.txt", 10);

    let output = app::run(&vault_config(&ws)).expect("run succeeds");
    assert!(matches!(output.outcome, Outcome::Written { .. }));

    let manifest = ws.manifest();
    assert_eq!(
        without_modified(&manifest),
        json!({
            "papers": [{"name": "x.pdf", "size": "2.0 KB", "path": "vault/papers/x.pdf"}],
            "root": [{"name": "readme.txt", "size": "10.0 B", "path": "vault/readme.txt"}]
        })
    );
    assert!(is_day_first(manifest["papers"][0]["modified"].as_str().unwrap()));
}

#[test]
fn output_is_two_space_indented_with_fixed_field_order() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/a.md", 1);

    app::run(&vault_config(&ws)).unwrap();

    let text = String::from_utf8(ws.manifest_bytes()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "{");
    assert_eq!(lines[1], "  \"root\": [");
    assert_eq!(lines[2], "    {");
    assert_eq!(lines[3], "      \"name\": \"a.md\",");
    assert_eq!(lines[4], "      \"size\": \"1.0 B\",");
    assert!(lines[5].starts_with("      \"modified\": \""));
    assert_eq!(lines[6], "      \"path\": \"vault/a.md\"");
    assert_eq!(*lines.last().unwrap(), "}");
}

#[test]
fn empty_subfolders_are_omitted() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/A/f1", 1);
    ws.create_file("vault/A/f2", 1);
    ws.create_dir("vault/B");

    app::run(&vault_config(&ws)).unwrap();

    let manifest = ws.manifest();
    let keys: Vec<_> = manifest.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, ["A"]);
    assert_eq!(manifest["A"].as_array().unwrap().len(), 2);
}

#[test]
fn groups_and_files_are_sorted() {
    let ws = TempWorkspace::new();
    for rel in [
        "vault/zeta/b",
        "vault/zeta/a",
        "vault/Alpha/c",
        "vault/mid/z.txt",
        "vault/mid/Y.txt",
        "vault/top.txt",
    ] {
        ws.create_file(rel, 1);
    }

    app::run(&vault_config(&ws)).unwrap();

    let text = String::from_utf8(ws.manifest_bytes()).unwrap();
    let positions: Vec<_> = ["\"Alpha\"", "\"mid\"", "\"root\"", "\"zeta\""]
        .iter()
        .map(|key| text.find(key).expect("key present"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let manifest = ws.manifest();
    let names = |group: &str| -> Vec<String> {
        manifest[group]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["name"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(names("mid"), ["Y.txt", "z.txt"]);
    assert_eq!(names("zeta"), ["a", "b"]);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/notes/a.md", 1300);
    ws.create_file("vault/notes/b.md", 5);
    ws.create_file("vault/c.txt", 0);

    app::run(&vault_config(&ws)).unwrap();
    let first = ws.manifest_bytes();
    app::run(&vault_config(&ws)).unwrap();
    assert_eq!(first, ws.manifest_bytes());
}

#[test]
fn missing_root_leaves_existing_manifest_untouched() {
    let ws = TempWorkspace::new();
    fs::write(ws.manifest_path(), "previous").unwrap();

    let err = app::run(&vault_config(&ws)).unwrap_err();

    assert!(matches!(domain_error(&err), Some(DomainError::RootNotFound { .. })));
    assert!(format!("{err:#}").contains("not found"));
    assert_eq!(fs::read_to_string(ws.manifest_path()).unwrap(), "previous");
}

#[test]
fn missing_root_creates_no_manifest() {
    let ws = TempWorkspace::new();
    assert!(app::run(&vault_config(&ws)).is_err());
    assert!(!ws.manifest_path().exists());
}

#[test]
fn empty_vault_is_a_no_op_write() {
    let ws = TempWorkspace::new();
    ws.create_dir("vault/empty");

    let output = app::run(&vault_config(&ws)).expect("empty is not an error");

    assert_eq!(output.outcome, Outcome::Empty);
    assert!(!ws.manifest_path().exists());
}

#[test]
fn visualisations_copy_then_scan() {
    let source = TempWorkspace::new();
    source.create_file("INDEX.HTML", 4);
    source.create_file("index.htm", 4);
    source.create_file("charts/bar.html", 2048);
    source.create_file("charts/bar.js", 10);
    source.create_file("raw/dump.csv", 10);
    let ws = TempWorkspace::new();

    let output = app::run(&visualisations_config(&ws, Some(source.path().to_path_buf()))).unwrap();

    assert_eq!(output.copy.expect("copy ran").copied.len(), 2);
    assert!(ws.path().join("visualisations/charts/bar.html").exists());
    assert!(!ws.path().join("visualisations/index.htm").exists());
    assert!(!ws.path().join("visualisations/raw").exists());
    assert_eq!(
        without_modified(&ws.manifest()),
        json!({
            "all": [{"name": "INDEX.HTML", "size": "4.0 B", "path": "visualisations/INDEX.HTML"}],
            "charts": [
                {"name": "bar.html", "size": "2.0 KB", "path": "visualisations/charts/bar.html"}
            ]
        })
    );
}

#[test]
fn visualisations_without_subfolders_use_all() {
    let source = TempWorkspace::new();
    source.create_file("b.html", 1);
    source.create_file("a.html", 1);
    let ws = TempWorkspace::new();

    app::run(&visualisations_config(&ws, Some(source.path().to_path_buf()))).unwrap();

    let manifest = ws.manifest();
    let names: Vec<_> =
        manifest["all"].as_array().unwrap().iter().map(|f| f["name"].clone()).collect();
    assert_eq!(names, [json!("a.html"), json!("b.html")]);
}

#[test]
fn visualisations_scan_skips_non_html_already_in_root() {
    let ws = TempWorkspace::new();
    ws.create_file("visualisations/page.html", 1);
    ws.create_file("visualisations/notes.txt", 1);

    app::run(&visualisations_config(&ws, None)).unwrap();

    let manifest = ws.manifest();
    assert_eq!(manifest["all"].as_array().unwrap().len(), 1);
    assert_eq!(manifest["all"][0]["path"], "visualisations/page.html");
}

#[test]
fn missing_copy_source_aborts_without_output() {
    let ws = TempWorkspace::new();
    let missing = ws.path().join("nowhere");

    let err = app::run(&visualisations_config(&ws, Some(missing.clone()))).unwrap_err();

    assert_eq!(domain_error(&err), Some(&DomainError::SourceNotFound { path: missing }));
    assert!(!ws.path().join("visualisations").exists());
    assert!(!ws.manifest_path().exists());
}

#[test]
fn month_first_style_applies_to_every_entry() {
    let ws = TempWorkspace::new();
    ws.create_file("vault/a/x", 1);
    ws.create_file("vault/y", 1);
    let mut config = vault_config(&ws);
    config.timestamp_style = TimestampStyle::MonthFirst;

    app::run(&config).unwrap();

    let manifest = ws.manifest();
    for group in ["a", "root"] {
        let stamp = manifest[group][0]["modified"].as_str().unwrap();
        // mm/dd/yy, hh:mm:ss AM
        assert_eq!(stamp.len(), 21, "{stamp}");
        assert_eq!(&stamp[8..10], ", ");
    }
}

#[test]
fn copy_source_equal_to_scan_root_is_refused_and_files_survive() {
    let ws = TempWorkspace::new();
    ws.create_file("visualisations/chart.html", 2048);
    let root = ws.path().join("visualisations");

    let err = app::run(&visualisations_config(&ws, Some(root.clone()))).unwrap_err();

    assert!(matches!(domain_error(&err), Some(DomainError::OverlappingCopy { .. })));
    assert_eq!(fs::metadata(root.join("chart.html")).unwrap().len(), 2048);
    assert!(!ws.manifest_path().exists());
}

#[test]
fn copy_source_above_scan_root_is_refused() {
    let ws = TempWorkspace::new();
    ws.create_file("visualisations/chart.html", 1);
    ws.create_file("page.html", 1);

    let err = app::run(&visualisations_config(&ws, Some(ws.path().to_path_buf()))).unwrap_err();

    assert!(matches!(domain_error(&err), Some(DomainError::OverlappingCopy { .. })));
    assert!(!ws.path().join("visualisations/visualisations").exists());
    assert!(!ws.path().join("visualisations/page.html").exists());
}
