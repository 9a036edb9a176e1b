//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It holds no
//! state; the binary polls events and feeds the result to the controller.

pub mod map;

pub use tui_yahtzee_types as types;

pub use map::{handle_key_event, should_quit};
