//! Model-View-Intent (MVI) primitives.
//!
//! Feature state lives in small state machines with unidirectional data
//! flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! States are plain values, intents are user actions or system events, and
//! the reducer is the only place transitions happen.

/// Marker trait for UI state objects.
///
/// States should be self-contained (everything the view needs) and
/// comparable, so redraw logic can detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents (user or system actions).
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// `reduce` must be a pure function: (State, Intent) -> State, with no
/// side effects. Persistence and logging happen in the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
