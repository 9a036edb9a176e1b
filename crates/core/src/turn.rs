//! Turn module - one player's turn as a small state machine
//!
//! ```text
//! Fresh --roll--> Rolling --roll--> ... --last roll--> CategorySelection
//!                    \                                     /
//!                     +------------ choose ---------------+--> Done
//! ```
//!
//! A category may be chosen any time after the first roll; the turn ends the
//! moment an unused category is scored.

use serde::Serialize;
use thiserror::Error;

use crate::dice::DiceSet;
use crate::rng::DieSource;
use crate::scorecard::{ScoreResult, Scorecard};
use crate::types::{Category, Dice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    /// Dice reset, nothing rolled yet
    Fresh,
    /// Rolled at least once, rolls remain
    Rolling,
    /// No rolls remain; only a category choice is left
    CategorySelection,
    /// A category was scored
    Done,
}

/// Rejected turn commands. A rejected command never changes the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("roll the dice before choosing a category")]
    NotRolled,
    #[error("{} is already scored", .0.label())]
    CategoryUsed(Category),
    #[error("the turn is over")]
    TurnOver,
}

/// Sequences one turn: reset, up to three rolls with holds, one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResolver {
    dice: DiceSet,
    phase: TurnPhase,
}

impl TurnResolver {
    pub fn new() -> Self {
        Self {
            dice: DiceSet::new(),
            phase: TurnPhase::Fresh,
        }
    }

    /// Start a new turn on the same resolver.
    pub fn begin(&mut self) {
        self.dice.reset();
        self.phase = TurnPhase::Fresh;
    }

    /// Roll the unheld dice and spend a roll.
    pub fn roll<S: DieSource + ?Sized>(&mut self, source: &mut S) -> Result<Dice, TurnError> {
        match self.phase {
            TurnPhase::Done => return Err(TurnError::TurnOver),
            TurnPhase::CategorySelection => return Err(TurnError::NoRollsLeft),
            TurnPhase::Fresh | TurnPhase::Rolling => {}
        }
        if self.dice.rolls_left() == 0 {
            return Err(TurnError::NoRollsLeft);
        }

        self.dice.roll(source);
        self.dice.consume_roll();
        self.phase = if self.dice.rolls_left() == 0 {
            TurnPhase::CategorySelection
        } else {
            TurnPhase::Rolling
        };

        self.dice.hand().ok_or(TurnError::NotRolled)
    }

    /// Toggle a hold. Ignored before the first roll, after the turn, or for
    /// an out-of-range index.
    pub fn toggle_hold(&mut self, index: usize) {
        if self.holds_allowed() {
            self.dice.toggle_hold(index);
        }
    }

    /// Set a hold. Same tolerance as [`TurnResolver::toggle_hold`].
    pub fn set_hold(&mut self, index: usize, held: bool) {
        if self.holds_allowed() {
            self.dice.set_hold(index, held);
        }
    }

    fn holds_allowed(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Rolling | TurnPhase::CategorySelection
        )
    }

    /// Score the current dice into `category` on `card`, ending the turn.
    pub fn choose(
        &mut self,
        card: &mut Scorecard,
        category: Category,
    ) -> Result<ScoreResult, TurnError> {
        if self.phase == TurnPhase::Done {
            return Err(TurnError::TurnOver);
        }
        let hand = self.dice.hand().ok_or(TurnError::NotRolled)?;
        let result = card
            .update_score(&hand, category)
            .ok_or(TurnError::CategoryUsed(category))?;
        self.phase = TurnPhase::Done;
        Ok(result)
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn rolls_left(&self) -> u8 {
        self.dice.rolls_left()
    }

    pub fn can_roll(&self) -> bool {
        matches!(self.phase, TurnPhase::Fresh | TurnPhase::Rolling) && self.dice.rolls_left() > 0
    }

    pub fn can_choose(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::Rolling | TurnPhase::CategorySelection
        )
    }

    pub fn is_done(&self) -> bool {
        self.phase == TurnPhase::Done
    }
}

impl Default for TurnResolver {
    fn default() -> Self {
        Self::new()
    }
}
