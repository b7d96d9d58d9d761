//! Core state types: dice, scores, players, the game snapshot, RNG.
//!
//! Everything here is plain data. Sequencing, side effects and phase
//! transitions live in [`crate::engine`].

pub mod dice;
pub mod score;
pub mod rng;
pub mod player;
pub mod state;

pub use dice::{DiceRoll, DieSlot, DieSource, ScriptedDice};
pub use score::Score;
pub use rng::{GameRng, GameRngState};
pub use player::{LockedDie, Player, PlayerId};
pub use state::{GameState, Phase};
