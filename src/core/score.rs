//! Score outcomes for a two-die throw.
//!
//! A throw resolves to exactly one of five outcomes. Three face pairs are
//! special ({1,2} Mexico, {2,3} Sand, {1,3} Pointing); doubles score
//! "hundreds"; everything else is a normal high-low score.
//!
//! "Lowest score" comparisons go through [`Score::numeric_value`], but
//! `Pointing` is a non-scoring sentinel and must be filtered out before
//! comparing, never ranked.

use serde::{Deserialize, Serialize};

/// Outcome of a two-die throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Score {
    /// 10 x high die + low die of a non-double, non-special throw.
    Normal(u8),
    /// A double. `drinks` equals the face and goes into the pot on
    /// confirmation; a later Mexico revokes outstanding hundreds.
    Hundred { face: u8, drinks: u8 },
    /// The {1,2} pair. Beats everything.
    Mexico,
    /// The {2,3} pair ("Zand"). The automatic worst real score.
    Sand,
    /// The {1,3} pair ("Wijzen"). A void throw; excluded from loser
    /// computation.
    Pointing,
}

impl Score {
    /// Comparable value used for the lowest-score computation.
    ///
    /// `Pointing` returns -1 as a sentinel; callers filter it out rather
    /// than comparing it.
    #[must_use]
    pub fn numeric_value(self) -> i32 {
        match self {
            Score::Normal(value) => i32::from(value),
            Score::Hundred { face, .. } => i32::from(face) * 100,
            Score::Mexico => 10_000,
            Score::Sand => 0,
            Score::Pointing => -1,
        }
    }

    /// True for the three exception throws (Mexico, Sand, Pointing).
    #[must_use]
    pub fn is_special(self) -> bool {
        matches!(self, Score::Mexico | Score::Sand | Score::Pointing)
    }

    /// Announcement text for a score dialog.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Score::Normal(value) => format!("Score: {value}"),
            Score::Hundred { face, drinks } => format!("{face}00 ({drinks} slokken)"),
            Score::Mexico => "MEXICO! (5 slokken in pot, 100-tallen weg)".to_string(),
            Score::Sand => "ZAND! (Direct half atje drinken)".to_string(),
            Score::Pointing => "WIJZEN! (Wijs naar spelers)".to_string(),
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Normal(value) => write!(f, "{value}"),
            Score::Hundred { face, .. } => write!(f, "{face}00"),
            Score::Mexico => write!(f, "MEXICO!"),
            Score::Sand => write!(f, "ZAND!"),
            Score::Pointing => write!(f, "WIJZEN"),
        }
    }
}
