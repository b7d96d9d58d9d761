//! The turn/phase state machine and its observer surface.

pub mod machine;
pub mod signals;

pub use machine::{GameEngine, DEFAULT_MAX_THROWS, MAX_PLAYERS, MEXICO_POT_BONUS};
pub use signals::{NavigationTarget, Signals};
