use crate::ui::mvi::Intent;

/// Edits to the task entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorIntent {
    /// A single typed character for the focused field.
    Insert(char),
    /// Bracketed-paste text for the focused field.
    Paste(String),
    /// Remove the character at the end of the focused field.
    Backspace,
    /// Move focus to the other field.
    FocusNext,
    /// Reset both fields (after a successful submit).
    Clear,
}

impl Intent for EditorIntent {}
