//! Terminal "game renderer" module.
//!
//! Renders [`core::GameSnapshot`]s into a simple framebuffer that is then
//! diffed and flushed to the terminal. No widget toolkit; the layout is a
//! handful of absolute positions computed from the viewport.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_yahtzee_core as core;
pub use tui_yahtzee_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
