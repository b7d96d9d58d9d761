//! Pure rule functions: the scoring table, the lock rule and penalty text.
//!
//! Nothing here touches game state; the state machine in [`crate::engine`]
//! applies these rules and their side effects.

pub mod scoring;

pub use scoring::{can_lock_die, loser_penalty, score};
