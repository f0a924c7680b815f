use crate::ui::mvi::UiState;

/// Which entry-form field receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Description,
    DueDate,
}

/// State of the task entry form.
///
/// The due-date field holds canonically masked text at all times; the
/// reducer re-derives it through [`crate::mask::reformat`] after every
/// edit. Neither field supports mid-string cursor movement — edits apply
/// at the end, matching the mask's cursor policy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub description: String,
    pub due_date: String,
    pub focused: EditorField,
}

impl UiState for EditorState {}

impl EditorState {
    /// True when both fields have content and the form can submit.
    pub fn can_submit(&self) -> bool {
        !self.description.is_empty() && !self.due_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_focuses_description() {
        assert_eq!(EditorState::default().focused, EditorField::Description);
    }

    #[test]
    fn can_submit_requires_both_fields() {
        let mut state = EditorState::default();
        assert!(!state.can_submit());
        state.description = "buy milk".to_string();
        assert!(!state.can_submit());
        state.due_date = "12/01/26".to_string();
        assert!(state.can_submit());
    }
}
