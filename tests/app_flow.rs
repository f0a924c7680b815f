//! End-to-end flows through the App: key routing, reducers, persistence.

mod common;

use common::make_app;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tuido::store::TaskStore;
use tuido::ui::app::{App, Focus};
use tuido::ui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_chars(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn typing_tab_typing_enter_adds_a_masked_task() {
    let (mut app, _guard, path) = make_app();

    type_chars(&mut app, "buy milk");
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "120126");
    assert_eq!(app.editor().due_date, "12/01/26");

    press(&mut app, KeyCode::Enter);

    let tasks = &app.task_list().tasks;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "buy milk");
    assert_eq!(tasks[0].due_date, "12/01/26");

    // Form cleared for the next entry
    assert!(app.editor().description.is_empty());
    assert!(app.editor().due_date.is_empty());

    // And the list hit the disk
    assert!(path.exists());
    let reloaded = TaskStore::new(&path).load().unwrap();
    assert_eq!(reloaded, *tasks);
}

#[test]
fn enter_without_a_due_date_adds_nothing() {
    let (mut app, _guard, path) = make_app();
    type_chars(&mut app, "buy milk");
    press(&mut app, KeyCode::Enter);
    assert!(app.task_list().tasks.is_empty());
    // Silent rejection keeps the form contents
    assert_eq!(app.editor().description, "buy milk");
    assert!(!path.exists());
}

#[test]
fn stray_letters_in_the_date_field_are_ignored() {
    let (mut app, _guard, _path) = make_app();
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "12oops31x26");
    assert_eq!(app.editor().due_date, "12/31/26");
}

#[test]
fn backspace_in_the_date_field_keeps_the_mask_canonical() {
    let (mut app, _guard, _path) = make_app();
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "123");
    assert_eq!(app.editor().due_date, "12/3");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.editor().due_date, "12");
}

#[test]
fn paste_goes_through_the_mask() {
    let (mut app, _guard, _path) = make_app();
    press(&mut app, KeyCode::Tab);
    app.on_paste("due 12/31 in 26".to_string());
    assert_eq!(app.editor().due_date, "12/31/26");
}

#[test]
fn tab_cycles_editor_fields_then_list() {
    let (mut app, _guard, _path) = make_app();
    assert_eq!(app.focus(), Focus::Editor);
    press(&mut app, KeyCode::Tab); // description -> due date
    assert_eq!(app.focus(), Focus::Editor);
    press(&mut app, KeyCode::Tab); // due date -> list
    assert_eq!(app.focus(), Focus::List);
    press(&mut app, KeyCode::Tab); // list -> description
    assert_eq!(app.focus(), Focus::Editor);
}

#[test]
fn enter_on_the_list_completes_the_selected_task() {
    let (mut app, _guard, path) = make_app();
    type_chars(&mut app, "water plants");
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "080926");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Tab); // to due date
    press(&mut app, KeyCode::Tab); // to list
    press(&mut app, KeyCode::Enter);

    assert!(app.task_list().tasks[0].is_complete);
    let reloaded = TaskStore::new(&path).load().unwrap();
    assert!(reloaded[0].is_complete);
}

#[test]
fn d_on_the_list_deletes_the_selected_task() {
    let (mut app, _guard, path) = make_app();
    type_chars(&mut app, "a");
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "010127");
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('d'));

    assert!(app.task_list().tasks.is_empty());
    let reloaded = TaskStore::new(&path).load().unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn list_keys_do_not_leak_into_the_form() {
    let (mut app, _guard, _path) = make_app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab); // focus list
    press(&mut app, KeyCode::Char('d')); // delete on empty list
    press(&mut app, KeyCode::Tab); // back to description
    assert!(app.editor().description.is_empty());
}

#[test]
fn startup_loads_the_persisted_list() {
    let (mut app, guard, path) = make_app();
    type_chars(&mut app, "persisted");
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "111126");
    press(&mut app, KeyCode::Enter);
    drop(app);

    let mut next_session = App::new(TaskStore::new(&path));
    next_session.load_tasks();
    assert_eq!(next_session.task_list().tasks.len(), 1);
    assert_eq!(next_session.task_list().tasks[0].description, "persisted");
    drop(guard);
}

#[test]
fn save_failure_is_reported_but_not_fatal() {
    let (_, temp, _) = make_app();
    // A path whose parent is a regular file cannot be created
    let blocker = temp.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    let mut app = App::new(TaskStore::new(blocker.join("tasks.json")));

    type_chars(&mut app, "doomed");
    press(&mut app, KeyCode::Tab);
    type_chars(&mut app, "010101");
    press(&mut app, KeyCode::Enter);

    // The task is still usable in memory, and the failure is surfaced
    assert_eq!(app.task_list().tasks.len(), 1);
    assert!(app.store_error().is_some());

    // The message decays after a few ticks
    for _ in 0..12 {
        app.on_tick();
    }
    assert!(app.store_error().is_none());
}

#[test]
fn corrupt_store_starts_empty_and_reports() {
    let (_, temp, path) = make_app();
    std::fs::write(&path, "not json at all").unwrap();
    let mut app = App::new(TaskStore::new(&path));
    app.load_tasks();
    assert!(app.task_list().tasks.is_empty());
    assert!(app.store_error().is_some());
    drop(temp);
}

#[test]
fn ctrl_q_requests_quit() {
    let (mut app, _guard, _path) = make_app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}
