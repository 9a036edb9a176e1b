//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Yahtzee rules and per-game state. It knows nothing
//! about terminals or keyboards; the only I/O is the high-score store, which
//! sits behind the [`highscore::HighScoreStore`] trait.
//!
//! - **Deterministic**: dice come from an injectable [`rng::DieSource`], so a
//!   seed (or a scripted source in tests) reproduces a game exactly
//! - **Testable**: scoring is a pure function of dice and category
//!
//! # Module Structure
//!
//! - [`dice`]: five dice, hold flags, rolls remaining
//! - [`rng`]: die sources (seeded random, scripted)
//! - [`scoring`]: points for a hand in a category
//! - [`scorecard`]: write-once ledger with subtotals and bonuses
//! - [`turn`]: one player's turn as a state machine
//! - [`ai`]: the greedy bot
//! - [`session`]: players, rounds, winner, high-score recording
//! - [`highscore`]: top-10 list and its stores
//! - [`snapshot`]: serializable views for presentation
//!
//! # Game Rules
//!
//! - **Turn**: up to three rolls; held dice are kept between rolls; the turn
//!   ends when an unused category is scored
//! - **Upper bonus**: +35 once the upper subtotal reaches 63
//! - **Yahtzee bonus**: once Yahtzee has scored 50, each further Yahtzee adds
//!   100 and acts as a joker for Full House and the straights
//! - **Game**: 13 rounds; ties go to player two
//!
//! # Example
//!
//! ```
//! use tui_yahtzee_core::{AiStrategy, RandomDice, Scorecard, TurnResolver};
//!
//! let mut dice = RandomDice::seeded(7);
//! let mut card = Scorecard::new();
//! let mut turn = TurnResolver::new();
//! let bot = AiStrategy::new();
//!
//! for _ in 0..13 {
//!     turn.begin();
//!     bot.play_turn(&mut turn, &mut card, &mut dice);
//! }
//! assert!(card.is_complete());
//! ```

pub mod ai;
pub mod dice;
pub mod highscore;
pub mod rng;
pub mod scorecard;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod turn;

pub use tui_yahtzee_types as types;

// Re-export commonly used types for convenience
pub use ai::AiStrategy;
pub use dice::DiceSet;
pub use highscore::{
    FileStore, HighScore, HighScoreError, HighScoreStore, HighScoreTable, MemoryStore,
};
pub use rng::{DieSource, RandomDice, ScriptedDice};
pub use scorecard::{ScoreResult, Scorecard};
pub use session::{GameSession, Player, Seat};
pub use snapshot::{CategoryRow, GameSnapshot, PlayerSnapshot, Screen};
pub use turn::{TurnError, TurnPhase, TurnResolver};
