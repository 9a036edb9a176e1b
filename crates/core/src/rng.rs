//! RNG module - die draws behind a swappable source
//!
//! Every die value in the game comes from a [`DieSource`]. Play uses
//! [`RandomDice`] (seedable, so a game can be replayed from its seed); tests use
//! [`ScriptedDice`] to force exact hands.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of independent uniform die values in `1..=6`.
pub trait DieSource {
    fn roll_die(&mut self) -> u8;
}

impl<T: DieSource + ?Sized> DieSource for &mut T {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

/// Uniform dice backed by a small, fast PRNG.
#[derive(Debug, Clone)]
pub struct RandomDice {
    rng: SmallRng,
    seed: Option<u64>,
}

impl RandomDice {
    /// Deterministic dice: the same seed produces the same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Dice seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            seed: None,
        }
    }

    /// Seed this source was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl DieSource for RandomDice {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// Replays a fixed sequence of die values, cycling when exhausted.
///
/// Values outside `1..=6` are clamped into range so a script can never
/// produce an invalid die.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    values: Vec<u8>,
    pos: usize,
}

impl ScriptedDice {
    pub fn new(values: impl Into<Vec<u8>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(1);
        }
        for v in &mut values {
            *v = (*v).clamp(1, 6);
        }
        Self { values, pos: 0 }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}
