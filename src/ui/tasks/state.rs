use crate::task::Task;
use crate::ui::mvi::UiState;

/// State of the task list pane.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    /// Index of the selected row. Meaningless while `tasks` is empty;
    /// always in bounds otherwise.
    pub selected: usize,
}

impl UiState for TaskListState {}

impl TaskListState {
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.is_complete).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.len() - self.pending_count()
    }
}
