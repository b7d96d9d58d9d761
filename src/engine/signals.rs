//! Observer-facing signals that live outside the game snapshot.
//!
//! Popups are one-shot: the machine raises a flag when the event occurs and
//! the observer acknowledges it through the matching dismiss intent. While
//! any popup is pending, intents that depend on its resolution are no-ops.

use serde::{Deserialize, Serialize};

/// Which top-level screen the observer should show next.
///
/// One-shot: consumed through [`crate::GameEngine::take_navigation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTarget {
    InitialRoll,
    Game,
    Result,
}

/// One-shot notification flags raised by the state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signals {
    /// True only during the synchronous roll computation. Purely advisory
    /// for animation; between intents it always reads false.
    pub rolling: bool,

    /// The current throw was the Pointing pair and will be voided.
    pub pointing_popup: bool,

    /// The current throw was Mexico.
    pub mexico_popup: bool,

    /// The current throw was Sand.
    pub sand_popup: bool,

    /// The current throw repeated the previous one (informational only).
    pub duim_popup: bool,

    /// Pending screen change, if any.
    pub navigation: Option<NavigationTarget>,
}

impl Signals {
    /// Any notification awaiting acknowledgement.
    #[must_use]
    pub fn popup_pending(&self) -> bool {
        self.pointing_popup || self.mexico_popup || self.sand_popup || self.duim_popup
    }
}
