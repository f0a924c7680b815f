//! Task entry form: description + masked due-date fields (MVI pattern).

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorField, EditorState};
