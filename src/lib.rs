//! TUI Yahtzee (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_yahtzee::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use tui_yahtzee_core as core;
pub use tui_yahtzee_engine as engine;
pub use tui_yahtzee_input as input;
pub use tui_yahtzee_term as term;
pub use tui_yahtzee_types as types;
