use std::fs;

use storesnap_encode::{assemble, AssembleOptions, CanonicalObjectEncoder};
use storesnap_model::{Scalar, TabularRecord};
use storesnap_store::{load_store, MemoryPayload, StoreError, TableData};
use tempfile::TempDir;

fn write_description(dir: &TempDir, text: &str) -> String {
    let path = dir.path().join("store.json");
    fs::write(&path, text).unwrap();
    path.to_string_lossy().to_string()
}

#[test]
fn loads_entries_in_declared_order() {
    let dir = TempDir::new().unwrap();
    let path = write_description(
        &dir,
        r#"{
            "entries": [
                {"name": "run_info", "record": {"detector": "north"}},
                {"name": "hits", "record": {"title": "hit bank"},
                 "table": {"columns": [{"name": "x", "kind": "fixed", "width": 3}],
                           "rows": [[[1, 2, 3]], [[4, 5, 6]]]}},
                {"name": "sub", "nested": true}
            ]
        }"#,
    );

    let store = load_store(&path).unwrap();
    assert_eq!(store.len(), 3);

    let entries: Vec<_> = store.iter().collect();
    assert_eq!(entries[0].name.as_ref(), "run_info");
    assert!(matches!(entries[0].payload, MemoryPayload::Plain(_)));

    match &entries[1].payload {
        MemoryPayload::Tabular { table, .. } => {
            assert_eq!(table.row_count(), 2);
            assert_eq!(table.columns().len(), 1);
            assert_eq!(table.value(1, 0, 2).unwrap(), Scalar::Int(6));
        }
        other => panic!("unexpected payload: {:?}", other),
    }

    assert!(matches!(entries[2].payload, MemoryPayload::Nested));
}

#[test]
fn missing_record_defaults_to_empty_object() {
    let dir = TempDir::new().unwrap();
    let path = write_description(&dir, r#"{"entries": [{"name": "bare"}]}"#);

    let store = load_store(&path).unwrap();
    let document = assemble(
        &store,
        &CanonicalObjectEncoder::new(),
        &AssembleOptions::default(),
    )
    .unwrap();
    assert_eq!(document, r#"{"bare":{},"dummy":null}"#);
}

#[test]
fn empty_description_builds_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = write_description(&dir, "{}");

    let store = load_store(&path).unwrap();
    assert!(store.is_empty());
}

#[test]
fn duplicate_entry_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_description(
        &dir,
        r#"{"entries": [{"name": "twice"}, {"name": "twice"}]}"#,
    );

    let err = load_store(&path).unwrap_err();
    match err {
        StoreError::DuplicateEntry { name } => assert_eq!(name, "twice"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn reserved_placeholder_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_description(&dir, r#"{"entries": [{"name": "dummy"}]}"#);

    assert!(matches!(
        load_store(&path).unwrap_err(),
        StoreError::ReservedName { .. }
    ));
}

#[test]
fn unsafe_entry_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_description(&dir, r#"{"entries": [{"name": "with space"}]}"#);

    assert!(matches!(
        load_store(&path).unwrap_err(),
        StoreError::InvalidName(_)
    ));
}

#[test]
fn unsafe_column_names_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_description(
        &dir,
        r#"{"entries": [{"name": "t",
            "table": {"columns": [{"name": "a\"b", "kind": "fixed", "width": 1}],
                      "rows": []}}]}"#,
    );

    assert!(matches!(
        load_store(&path).unwrap_err(),
        StoreError::InvalidName(_)
    ));
}

#[test]
fn row_arity_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_description(
        &dir,
        r#"{"entries": [{"name": "t",
            "table": {"columns": [{"name": "x", "kind": "fixed", "width": 1},
                                  {"name": "y", "kind": "fixed", "width": 1}],
                      "rows": [[[1], [2]], [[3]]]}}]}"#,
    );

    let err = load_store(&path).unwrap_err();
    match err {
        StoreError::MalformedTable { entry, row, .. } => {
            assert_eq!(entry, "t");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(
        load_store(&path).unwrap_err(),
        StoreError::Io(_)
    ));
}

#[test]
fn malformed_json_surfaces_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_description(&dir, "{not json");

    assert!(matches!(
        load_store(&path).unwrap_err(),
        StoreError::JsonParse(_)
    ));
}

#[test]
fn table_data_reads_are_bounds_checked() {
    let table = TableData::new(vec![], vec![]);
    assert!(table.value(0, 0, 0).is_err());
    assert_eq!(table.row_count(), 0);
}

#[test]
fn loaded_store_assembles_deterministically() {
    let dir = TempDir::new().unwrap();
    let path = write_description(
        &dir,
        r#"{
            "entries": [
                {"name": "hits", "record": {"title": "hit bank"},
                 "table": {"columns": [{"name": "e", "kind": "float", "width": 2}],
                           "rows": [[[0.5, 1.0]]]}},
                {"name": "run_info", "record": {"detector": "north"}}
            ]
        }"#,
    );

    let store = load_store(&path).unwrap();
    let document = assemble(
        &store,
        &CanonicalObjectEncoder::new(),
        &AssembleOptions::default(),
    )
    .unwrap();
    assert_eq!(
        document,
        r#"{"hits":{"title":"hit bank"},"hits-Content":[{"e":[0.5,1]}],"run_info":{"detector":"north"},"dummy":null}"#
    );
}
