//! Field state (pure).
//!
//! All state transitions are plain `&mut self` methods testable without a
//! terminal.

pub mod bubble_field;
pub mod mouse_handler;
pub mod scroll;

// Re-export for convenience
pub use bubble_field::BubbleField;
pub use mouse_handler::{handle_mouse_event, CellScale, MouseOutcome};
pub use scroll::{ScrollBounds, ScrollState, DEFAULT_DRAG_MULTIPLIER};
