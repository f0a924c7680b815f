//! Task model shared by the UI and the store.

use serde::{Deserialize, Serialize};

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    /// Free-form masked date string (e.g. "12/31/26"). Only the digit
    /// grouping is enforced, not calendar validity.
    pub due_date: String,
    #[serde(default)]
    pub is_complete: bool,
}

impl Task {
    pub fn new(description: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            due_date: due_date.into(),
            is_complete: false,
        }
    }

    /// Completion is one-way; there is no way to un-complete a task.
    pub fn mark_complete(&mut self) {
        self.is_complete = true;
    }

    /// The list row for this task: `[X] desc (Due: 12/31/26)`.
    pub fn display_line(&self) -> String {
        let checkbox = if self.is_complete { "[X] " } else { "[  ] " };
        format!("{}{} (Due: {})", checkbox, self.description, self.due_date)
    }
}
