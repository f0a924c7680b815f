use crate::ui::app::{App, Focus};
use crate::ui::editor::EditorIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if matches!(key.code, KeyCode::Tab) {
        app.cycle_focus();
        return;
    }

    match app.focus() {
        Focus::Editor => handle_editor_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_entry(),
        KeyCode::Backspace => app.on_editor_intent(EditorIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_editor_intent(EditorIntent::Insert(ch));
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.select_up(),
        KeyCode::Down => app.select_down(),
        KeyCode::Enter => app.complete_selected(),
        KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('c') => app.complete_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
