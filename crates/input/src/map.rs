//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Dice
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') => Some(GameAction::Roll),
        KeyCode::Char(c @ '1'..='5') => Some(GameAction::ToggleHold(c as u8 - b'1')),

        // Scorecard
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::CursorDown),
        KeyCode::Enter => Some(GameAction::Choose),

        // Flow
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::Continue),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::PlayAgain),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(GameAction::ToggleHighScores),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
