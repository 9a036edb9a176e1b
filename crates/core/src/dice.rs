//! Dice module - the five dice of the active turn
//!
//! Dice keep positional identity for the whole turn: die `i` is always the same
//! die, and its held flag lives at the same index. Values stay empty until the
//! first roll of the turn.

use arrayvec::ArrayVec;

use crate::rng::DieSource;
use crate::types::{Dice, DICE_COUNT, ROLLS_PER_TURN};

/// Five dice, their held flags, and the rolls left this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    values: ArrayVec<u8, DICE_COUNT>,
    held: [bool; DICE_COUNT],
    rolls_left: u8,
}

impl DiceSet {
    pub fn new() -> Self {
        Self {
            values: ArrayVec::new(),
            held: [false; DICE_COUNT],
            rolls_left: ROLLS_PER_TURN,
        }
    }

    /// Roll the dice.
    ///
    /// The first roll of a turn draws all five dice. Later rolls redraw only
    /// the dice that are not held. `rolls_left` is not touched; callers
    /// check it and call [`DiceSet::consume_roll`].
    pub fn roll<S: DieSource + ?Sized>(&mut self, source: &mut S) {
        if self.values.is_empty() {
            for _ in 0..DICE_COUNT {
                self.values.push(source.roll_die());
            }
            return;
        }

        for (value, held) in self.values.iter_mut().zip(self.held) {
            if !held {
                *value = source.roll_die();
            }
        }
    }

    /// Spend one roll. Saturates at zero.
    pub fn consume_roll(&mut self) {
        self.rolls_left = self.rolls_left.saturating_sub(1);
    }

    /// Flip the held flag of die `index`. Out-of-range indices are ignored.
    pub fn toggle_hold(&mut self, index: usize) {
        if let Some(h) = self.held.get_mut(index) {
            *h = !*h;
        }
    }

    /// Set the held flag of die `index`. Out-of-range indices are ignored.
    pub fn set_hold(&mut self, index: usize, held: bool) {
        if let Some(h) = self.held.get_mut(index) {
            *h = held;
        }
    }

    /// Start-of-turn state: no values, nothing held, full rolls.
    pub fn reset(&mut self) {
        self.values.clear();
        self.held = [false; DICE_COUNT];
        self.rolls_left = ROLLS_PER_TURN;
    }

    /// Current values (empty before the first roll).
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// The full hand, once rolled.
    pub fn hand(&self) -> Option<Dice> {
        self.values.as_slice().try_into().ok()
    }

    pub fn held(&self) -> &[bool; DICE_COUNT] {
        &self.held
    }

    pub fn is_held(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or(false)
    }

    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    pub fn has_rolled(&self) -> bool {
        !self.values.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn set_values(&mut self, dice: Dice) {
        self.values.clear();
        self.values.extend(dice);
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}
