mod common;

use common::make_task;
use tempfile::TempDir;
use tuido::store::{StoreError, TaskStore};

#[test]
fn save_and_reload_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("tasks.json"));

    let mut tasks = vec![
        make_task("water plants", "08/09/26"),
        make_task("file taxes", "04/15/27"),
    ];
    tasks[0].mark_complete();

    store.save(&tasks).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, tasks);
}

#[test]
fn missing_file_loads_as_empty_list() {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("does-not-exist.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("nested").join("deep").join("tasks.json"));
    store.save(&[make_task("a", "01/01/27")]).unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn corrupt_json_is_a_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    std::fs::write(&path, "{ not json").unwrap();
    let store = TaskStore::new(&path);
    assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
}

#[test]
fn future_format_version_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    std::fs::write(&path, r#"{"version": 2, "tasks": []}"#).unwrap();
    let store = TaskStore::new(&path);
    assert!(matches!(
        store.load(),
        Err(StoreError::UnsupportedVersion { version: 2, .. })
    ));
}

#[test]
fn missing_is_complete_defaults_to_false() {
    // Hand-edited files may omit the flag
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tasks.json");
    std::fs::write(
        &path,
        r#"{"version": 1, "tasks": [{"description": "a", "due_date": "01/01/27"}]}"#,
    )
    .unwrap();
    let store = TaskStore::new(&path);
    let tasks = store.load().unwrap();
    assert!(!tasks[0].is_complete);
}

#[test]
fn save_replaces_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("tasks.json"));
    store
        .save(&[make_task("a", "01/01/27"), make_task("b", "02/02/27")])
        .unwrap();
    store.save(&[make_task("c", "03/03/27")]).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "c");
}

#[test]
fn no_temp_file_left_behind_after_save() {
    let temp_dir = TempDir::new().unwrap();
    let store = TaskStore::new(temp_dir.path().join("tasks.json"));
    store.save(&[make_task("a", "01/01/27")]).unwrap();
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("tasks.json")]);
}
