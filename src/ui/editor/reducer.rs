use crate::mask;
use crate::ui::editor::intent::EditorIntent;
use crate::ui::editor::state::{EditorField, EditorState};
use crate::ui::mvi::Reducer;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::Insert(ch) => edit_focused(state, |field, text| match field {
                EditorField::Description => {
                    if !ch.is_control() {
                        text.push(ch);
                    }
                }
                EditorField::DueDate => {
                    text.push(ch);
                    *text = mask::reformat(text);
                }
            }),
            EditorIntent::Paste(pasted) => edit_focused(state, |field, text| match field {
                EditorField::Description => {
                    text.extend(pasted.chars().filter(|ch| !ch.is_control()));
                }
                EditorField::DueDate => {
                    text.push_str(&pasted);
                    *text = mask::reformat(text);
                }
            }),
            EditorIntent::Backspace => edit_focused(state, |field, text| {
                text.pop();
                if field == EditorField::DueDate {
                    // Popping may have removed a separator; re-derive so the
                    // mask stays canonical.
                    *text = mask::reformat(text);
                }
            }),
            EditorIntent::FocusNext => EditorState {
                focused: match state.focused {
                    EditorField::Description => EditorField::DueDate,
                    EditorField::DueDate => EditorField::Description,
                },
                ..state
            },
            EditorIntent::Clear => EditorState::default(),
        }
    }
}

/// Apply an edit closure to whichever field currently has focus.
fn edit_focused(
    mut state: EditorState,
    edit: impl FnOnce(EditorField, &mut String),
) -> EditorState {
    let focused = state.focused;
    let text = match focused {
        EditorField::Description => &mut state.description,
        EditorField::DueDate => &mut state.due_date,
    };
    edit(focused, text);
    state
}
