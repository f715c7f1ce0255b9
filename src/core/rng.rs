//! Dice: the only nondeterministic input to the engine.
//!
//! ## Key Features
//!
//! - **Single seam**: everything that needs a die roll goes through
//!   [`DiceSource`], so tests can substitute [`FixedDice`].
//! - **Deterministic**: `GameRng` with the same seed rolls the same sequence.
//!   Replays go through the command log, which records every face rolled.
//!
//! ```
//! use reverse_ludo::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single die face, always 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DieValue(u8);

impl DieValue {
    /// The face that lets tokens leave home and grants another roll.
    pub const SIX: DieValue = DieValue(6);

    /// Returns `None` unless `value` is a die face.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 6 {
            Some(Self(value))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }
}

impl TryFrom<u8> for DieValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DieValue::new(value).ok_or_else(|| format!("die value {value} is not in 1..=6"))
    }
}

impl From<DieValue> for u8 {
    fn from(die: DieValue) -> Self {
        die.0
    }
}

impl std::fmt::Display for DieValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of die rolls.
pub trait DiceSource {
    /// Roll one die.
    fn roll(&mut self) -> DieValue;
}

/// Seeded ChaCha8 dice.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> DieValue {
        DieValue(self.inner.gen_range(1..=6))
    }
}

/// Scripted dice for tests and replays.
///
/// Rolls the queued faces in order, then repeats the last one.
#[derive(Clone, Debug)]
pub struct FixedDice {
    queue: VecDeque<DieValue>,
    last: DieValue,
}

impl FixedDice {
    /// Always roll `value`.
    ///
    /// Panics if `value` is not a die face.
    #[must_use]
    pub fn always(value: u8) -> Self {
        Self::sequence(&[value])
    }

    /// Roll `values` in order, then keep repeating the final one.
    ///
    /// Panics if `values` is empty or holds a non-face.
    #[must_use]
    pub fn sequence(values: &[u8]) -> Self {
        let queue: VecDeque<DieValue> = values
            .iter()
            .map(|&v| DieValue::new(v).expect("FixedDice values must be 1..=6"))
            .collect();
        let last = *queue.back().expect("FixedDice needs at least one value");
        Self { queue, last }
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> DieValue {
        match self.queue.pop_front() {
            Some(die) => {
                self.last = die;
                die
            }
            None => self.last,
        }
    }
}
