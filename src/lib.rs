//! # mexico-engine
//!
//! Rules engine and turn state machine for the multiplayer dice game
//! "Mexico": players take turns throwing two dice, may lock a die showing
//! 1 or 2, grow a shared pot of drink penalties, and settle end-of-round
//! ties in a recursive death match.
//!
//! ## Design Principles
//!
//! 1. **Intents in, snapshots out**: the presentation layer issues intents
//!    (`roll_dice`, `lock_die`, `confirm_score`, ...) and observes immutable
//!    [`GameState`] snapshots plus one-shot [`Signals`].
//!
//! 2. **No error type**: a stale or invalid intent is absorbed as a silent
//!    no-op. The UI gates affordances; the engine re-validates regardless
//!    and is the final authority.
//!
//! 3. **Injected randomness**: the engine is generic over a [`DieSource`],
//!    so tests replace the seeded [`GameRng`] with scripted throws.
//!
//! ## Modules
//!
//! - `core`: dice, scores, players, the game snapshot, RNG
//! - `rules`: the pure scoring table and lock rule
//! - `engine`: the turn/phase state machine and observer signals

pub mod core;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    DiceRoll, DieSlot, DieSource, ScriptedDice,
    GameRng, GameRngState,
    LockedDie, Player, PlayerId,
    Score,
    GameState, Phase,
};

pub use crate::rules::{can_lock_die, loser_penalty, score};

pub use crate::engine::{
    GameEngine, NavigationTarget, Signals,
    DEFAULT_MAX_THROWS, MAX_PLAYERS, MEXICO_POT_BONUS,
};
