//! Game engine module - drives a full game on top of the core rules
//!
//! The [`Controller`] turns [`types::GameAction`]s into core calls: it
//! rotates seats, lets the bot play its turns, advances rounds and records
//! the result. [`simulate`] runs bot-only games without a terminal.

pub mod controller;
pub mod simulate;

pub use tui_yahtzee_core as core;
pub use tui_yahtzee_types as types;

pub use controller::Controller;
pub use simulate::{simulate, GameSummary, SeatSummary};
