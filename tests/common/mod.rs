//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;
use tuido::store::TaskStore;
use tuido::task::Task;
use tuido::ui::app::App;
use tuido::ui::editor::{EditorIntent, EditorReducer, EditorState};
use tuido::ui::mvi::Reducer;

/// An `App` persisting into a fresh temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub fn make_app() -> (App, TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("tasks.json");
    let app = App::new(TaskStore::new(&path));
    (app, temp_dir, path)
}

pub fn make_task(description: &str, due_date: &str) -> Task {
    Task::new(description, due_date)
}

/// Run a string through the editor reducer one character at a time, as if
/// the user typed it.
pub fn type_str(state: EditorState, text: &str) -> EditorState {
    text.chars().fold(state, |state, ch| {
        EditorReducer::reduce(state, EditorIntent::Insert(ch))
    })
}
