use crate::store::{StoreError, TaskStore};
use crate::ui::editor::{EditorField, EditorIntent, EditorReducer, EditorState};
use crate::ui::mvi::Reducer;
use crate::ui::tasks::{TaskListIntent, TaskListReducer, TaskListState};

/// How many ticks a save-failure message stays in the footer.
const STORE_ERROR_TICKS: u8 = 12;

/// Which pane owns keystrokes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Editor,
    List,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Entry form state (MVI pattern).
    editor: EditorState,
    /// Task list state (MVI pattern).
    task_list: TaskListState,
    /// Persistence handle (resource, managed outside MVI).
    store: TaskStore,
    /// Last persistence failure, shown transiently in the footer.
    store_error: Option<String>,
    store_error_ticks: u8,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Editor,
            editor: EditorState::default(),
            task_list: TaskListState::default(),
            store,
            store_error: None,
            store_error_ticks: 0,
        }
    }

    /// Load the persisted list into the task pane.
    ///
    /// A load failure (corrupt file, unreadable file) starts the session
    /// with an empty list rather than crashing; the error is logged and
    /// surfaced in the footer.
    pub fn load_tasks(&mut self) {
        match self.store.load() {
            Ok(tasks) => {
                dispatch_mvi!(self, task_list, TaskListReducer, TaskListIntent::Load(tasks));
            }
            Err(err) => {
                tracing::warn!(path = %self.store.path().display(), error = %err, "failed to load tasks, starting empty");
                self.report_store_error(&err);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn task_list(&self) -> &TaskListState {
        &self.task_list
    }

    pub fn store_error(&self) -> Option<&str> {
        self.store_error.as_deref()
    }

    /// Tab order: description field, due-date field, task list, back around.
    pub fn cycle_focus(&mut self) {
        match (self.focus, self.editor.focused) {
            (Focus::Editor, EditorField::Description) => {
                dispatch_mvi!(self, editor, EditorReducer, EditorIntent::FocusNext);
            }
            (Focus::Editor, EditorField::DueDate) => {
                self.focus = Focus::List;
            }
            (Focus::List, _) => {
                // Re-enter the form at its first field.
                if self.editor.focused == EditorField::DueDate {
                    dispatch_mvi!(self, editor, EditorReducer, EditorIntent::FocusNext);
                }
                self.focus = Focus::Editor;
            }
        }
    }

    pub fn on_editor_intent(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Bracketed paste goes to the focused form field; the list has no
    /// paste target.
    pub fn on_paste(&mut self, text: String) {
        if self.focus == Focus::Editor {
            dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Paste(text));
        }
    }

    /// Add the form's task to the list, clear the form, persist.
    ///
    /// With an empty description or due date this is a no-op: no task, no
    /// error (the form simply keeps its contents).
    pub fn submit_entry(&mut self) {
        if !self.editor.can_submit() {
            return;
        }
        let intent = TaskListIntent::Submit {
            description: self.editor.description.clone(),
            due_date: self.editor.due_date.clone(),
        };
        dispatch_mvi!(self, task_list, TaskListReducer, intent);
        dispatch_mvi!(self, editor, EditorReducer, EditorIntent::Clear);
        self.persist();
    }

    pub fn delete_selected(&mut self) {
        if self.task_list.selected_task().is_none() {
            return;
        }
        dispatch_mvi!(self, task_list, TaskListReducer, TaskListIntent::DeleteSelected);
        self.persist();
    }

    pub fn complete_selected(&mut self) {
        if self.task_list.selected_task().is_none() {
            return;
        }
        dispatch_mvi!(self, task_list, TaskListReducer, TaskListIntent::CompleteSelected);
        self.persist();
    }

    pub fn select_up(&mut self) {
        dispatch_mvi!(self, task_list, TaskListReducer, TaskListIntent::SelectUp);
    }

    pub fn select_down(&mut self) {
        dispatch_mvi!(self, task_list, TaskListReducer, TaskListIntent::SelectDown);
    }

    pub fn on_tick(&mut self) {
        if self.store_error_ticks > 0 {
            self.store_error_ticks -= 1;
            if self.store_error_ticks == 0 {
                self.store_error = None;
            }
        }
    }

    /// Write the current list to disk. Failure keeps the in-memory list
    /// usable: log it and show a transient footer message.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.task_list.tasks) {
            tracing::warn!(path = %self.store.path().display(), error = %err, "failed to save tasks");
            self.report_store_error(&err);
        }
    }

    fn report_store_error(&mut self, err: &StoreError) {
        self.store_error = Some(err.to_string());
        self.store_error_ticks = STORE_ERROR_TICKS;
    }
}
