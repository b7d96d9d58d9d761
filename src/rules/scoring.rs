//! The dice-scoring rule table.
//!
//! Total over all 36 ordered face pairs and symmetric in its arguments.
//! The special pairs are disjoint, so the evaluation order below is fixed
//! by convention (Mexico, Sand, Pointing, doubles, normal) rather than by
//! necessity.

use crate::core::score::Score;

/// Classify a two-die throw.
///
/// ```
/// use mexico_engine::{score, Score};
///
/// assert_eq!(score(2, 1), Score::Mexico);
/// assert_eq!(score(4, 4), Score::Hundred { face: 4, drinks: 4 });
/// assert_eq!(score(5, 3), Score::Normal(53));
/// ```
#[must_use]
pub fn score(a: u8, b: u8) -> Score {
    debug_assert!((1..=6).contains(&a) && (1..=6).contains(&b));

    if is_pair(a, b, 1, 2) {
        return Score::Mexico;
    }
    if is_pair(a, b, 2, 3) {
        return Score::Sand;
    }
    if is_pair(a, b, 1, 3) {
        return Score::Pointing;
    }
    if a == b {
        return Score::Hundred { face: a, drinks: a };
    }

    // Normal score: highest die first
    Score::Normal(a.max(b) * 10 + a.min(b))
}

fn is_pair(a: u8, b: u8, x: u8, y: u8) -> bool {
    (a == x && b == y) || (a == y && b == x)
}

/// Whether a die showing this face may be locked.
///
/// Only 1 and 2 qualify; both keep a path back to Mexico on the next throw.
#[must_use]
pub fn can_lock_die(face: u8) -> bool {
    face == 1 || face == 2
}

/// Drink instruction for the round's loser.
///
/// Sand is settled on the spot; any other losing score empties the pot.
#[must_use]
pub fn loser_penalty(pot: u32, lost_on_sand: bool) -> String {
    if lost_on_sand {
        "Half atje direct".to_string()
    } else {
        format!("{pot} slokken uit de pot")
    }
}
