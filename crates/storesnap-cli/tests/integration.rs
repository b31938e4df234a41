//! Integration tests for CLI commands.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_STORE: &str = r#"{
    "entries": [
        {"name": "run_info", "record": {"detector": "north", "run": 12}},
        {"name": "hits", "record": {"title": "hit bank"},
         "table": {"columns": [{"name": "x", "kind": "fixed", "width": 3}],
                   "rows": [[[1, 2, 3]], [[4, 5, 6]]]}}
    ]
}"#;

const SAMPLE_DOCUMENT: &str = r#"{"hits":{"title":"hit bank"},"hits-Content":[{"x":[1,2,3]},{"x":[4,5,6]}],"run_info":{"detector":"north","run":12},"dummy":null}"#;

fn create_store(text: &str) -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.json");
    fs::write(&path, text).unwrap();
    (temp_dir, path.to_string_lossy().to_string())
}

fn run_cli(args: &[&str]) -> (bool, String, String) {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "storesnap", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    (output.status.success(), stdout, stderr)
}

#[test]
fn dump_writes_document_to_stdout() {
    let (_dir, store) = create_store(SAMPLE_STORE);

    let (ok, stdout, _) = run_cli(&["dump", &store]);
    assert!(ok);
    assert_eq!(stdout.trim_end(), SAMPLE_DOCUMENT);
}

#[test]
fn dump_output_file_is_reproducible() {
    let (dir, store) = create_store(SAMPLE_STORE);
    let out_path = dir.path().join("out.json");
    let out = out_path.to_string_lossy().to_string();

    let (ok, _, _) = run_cli(&["dump", &store, "--output", &out]);
    assert!(ok);
    let first = fs::read(&out_path).unwrap();
    assert_eq!(String::from_utf8(first.clone()).unwrap(), SAMPLE_DOCUMENT);

    let (ok, _, _) = run_cli(&["dump", &store, "--output", &out]);
    assert!(ok);
    let second = fs::read(&out_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dump_can_omit_the_placeholder() {
    let (_dir, store) = create_store(r#"{"entries": []}"#);

    let (ok, stdout, _) = run_cli(&["dump", &store, "--no-placeholder"]);
    assert!(ok);
    assert_eq!(stdout.trim_end(), "{}");
}

#[test]
fn dump_fails_on_nested_store_and_leaves_no_file() {
    let (dir, store) = create_store(
        r#"{"entries": [{"name": "ok"}, {"name": "sub", "nested": true}]}"#,
    );
    let out_path = dir.path().join("out.json");
    let out = out_path.to_string_lossy().to_string();

    let (ok, _, stderr) = run_cli(&["dump", &store, "--output", &out]);
    assert!(!ok);
    assert!(stderr.contains("nested store"));
    assert!(!out_path.exists());
}

#[test]
fn dump_fails_on_missing_store() {
    let (dir, _) = create_store(SAMPLE_STORE);
    let absent = dir.path().join("absent.json").to_string_lossy().to_string();

    let (ok, _, stderr) = run_cli(&["dump", &absent]);
    assert!(!ok);
    assert!(stderr.contains("Failed to load store"));
}

#[test]
fn list_shows_entries_as_a_table() {
    let (_dir, store) = create_store(SAMPLE_STORE);

    let (ok, stdout, _) = run_cli(&["list", &store]);
    assert!(ok);
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("run_info"));
    assert!(stdout.contains("hits"));
    assert!(stdout.contains("tabular"));
}

#[test]
fn list_json_lines_parse() {
    let (_dir, store) = create_store(SAMPLE_STORE);

    let (ok, stdout, _) = run_cli(&["list", &store, "--json"]);
    assert!(ok);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["name"], "run_info");
    assert_eq!(first["kind"], "plain");

    let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(second["kind"], "tabular");
    assert_eq!(second["rows"], 2);
    assert_eq!(second["columns"], 1);
}

#[test]
fn digest_is_stable_and_value_sensitive() {
    let (_dir, store) = create_store(SAMPLE_STORE);

    let (ok, first, _) = run_cli(&["digest", &store]);
    assert!(ok);
    assert!(first.trim_end().starts_with("sha-256:"));

    let (ok, second, _) = run_cli(&["digest", &store]);
    assert!(ok);
    assert_eq!(first, second);

    let (_dir2, changed) = create_store(&SAMPLE_STORE.replace("[1, 2, 3]", "[1, 2, 4]"));
    let (ok, third, _) = run_cli(&["digest", &changed]);
    assert!(ok);
    assert_ne!(first, third);
}
