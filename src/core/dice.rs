//! Dice values and the die-source capability.
//!
//! ## DiceRoll
//!
//! An ordered two-die throw. Order matters for the locking protocol (a
//! locked die keeps its slot), but most rules compare faces unordered.
//!
//! ## DieSource
//!
//! The engine's only external effect is randomness, taken through this
//! trait so tests can inject scripted throws.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Which of the two dice slots a value occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSlot {
    First,
    Second,
}

/// An ordered two-die throw. Faces are 1-6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    /// Create a roll from two faces.
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Same two faces in either orientation. This is the Duim test.
    ///
    /// ```
    /// use mexico_engine::DiceRoll;
    ///
    /// assert!(DiceRoll::new(3, 5).same_faces(DiceRoll::new(5, 3)));
    /// assert!(!DiceRoll::new(3, 5).same_faces(DiceRoll::new(3, 4)));
    /// ```
    #[must_use]
    pub fn same_faces(self, other: DiceRoll) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }

    /// The higher of the two faces.
    #[must_use]
    pub fn high(self) -> u8 {
        self.first.max(self.second)
    }

    /// The lower of the two faces.
    #[must_use]
    pub fn low(self) -> u8 {
        self.first.min(self.second)
    }

    /// The face in the given slot.
    #[must_use]
    pub fn face(self, slot: DieSlot) -> u8 {
        match slot {
            DieSlot::First => self.first,
            DieSlot::Second => self.second,
        }
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

/// Capability producing uniformly distributed die faces in `1..=6`.
pub trait DieSource {
    /// Roll a single die.
    fn roll_die(&mut self) -> u8;
}

/// Pre-scripted die source for tests and replays.
///
/// Faces are handed out in order; running past the end of the script is a
/// programming error and panics.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a source that yields the given faces in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DieSource for ScriptedDice {
    fn roll_die(&mut self) -> u8 {
        self.faces.pop_front().expect("scripted dice exhausted")
    }
}
