//! Player identity and per-turn state.
//!
//! Players are owned by the game snapshot's rosters; the state machine
//! replaces them wholesale, observers never mutate them.

use serde::{Deserialize, Serialize};

use super::dice::{DiceRoll, DieSlot};
use super::score::Score;

/// Opaque player identifier, unique within one engine instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A die held in place across re-rolls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedDie {
    /// The locked face. Only 1 and 2 qualify.
    pub face: u8,
    /// Slot the face keeps across subsequent throws.
    pub slot: DieSlot,
}

/// Per-player state for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Finalized score for the round, if confirmed.
    pub score: Option<Score>,
    pub throws_used: u32,
    pub locked_die: Option<LockedDie>,
    pub has_rolled: bool,
    /// Single-die seed throw that fixes turn order.
    pub initial_roll: Option<u8>,
    pub current_dice: Option<DiceRoll>,
    /// Previous throw, kept for Duim detection.
    pub previous_dice: Option<DiceRoll>,
    /// Present for future variants; no rule reads it yet.
    pub eliminated: bool,
}

impl Player {
    /// Create a fresh player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: None,
            throws_used: 0,
            locked_die: None,
            has_rolled: false,
            initial_roll: None,
            current_dice: None,
            previous_dice: None,
            eliminated: false,
        }
    }

    /// Clear turn state for a new turn or death-match entry.
    ///
    /// The initial roll and the elimination flag survive.
    pub fn reset_turn_state(&mut self) {
        self.score = None;
        self.throws_used = 0;
        self.locked_die = None;
        self.has_rolled = false;
        self.current_dice = None;
        self.previous_dice = None;
    }

    /// Turn-state reset plus the elimination flag, for a fresh round.
    pub fn reset_for_new_round(&mut self) {
        self.reset_turn_state();
        self.eliminated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rolled_player() -> Player {
        let mut player = Player::new(PlayerId::new(1), "Anna");
        player.score = Some(Score::Normal(54));
        player.throws_used = 2;
        player.locked_die = Some(LockedDie {
            face: 1,
            slot: DieSlot::First,
        });
        player.has_rolled = true;
        player.initial_roll = Some(6);
        player.current_dice = Some(DiceRoll::new(1, 4));
        player.previous_dice = Some(DiceRoll::new(1, 4));
        player.eliminated = true;
        player
    }

    #[test]
    fn test_new_player_is_blank() {
        let player = Player::new(PlayerId::new(0), "Bob");

        assert_eq!(player.name, "Bob");
        assert!(player.score.is_none());
        assert_eq!(player.throws_used, 0);
        assert!(player.locked_die.is_none());
        assert!(!player.has_rolled);
        assert!(player.current_dice.is_none());
        assert!(!player.eliminated);
    }

    #[test]
    fn test_reset_turn_state() {
        let mut player = rolled_player();
        player.reset_turn_state();

        assert!(player.score.is_none());
        assert_eq!(player.throws_used, 0);
        assert!(player.locked_die.is_none());
        assert!(!player.has_rolled);
        assert!(player.current_dice.is_none());
        assert!(player.previous_dice.is_none());
        // Survives the reset
        assert_eq!(player.initial_roll, Some(6));
        assert!(player.eliminated);
    }

    #[test]
    fn test_reset_for_new_round_clears_elimination() {
        let mut player = rolled_player();
        player.reset_for_new_round();

        assert!(!player.eliminated);
        assert_eq!(player.initial_roll, Some(6));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::new(3)), "Player 3");
    }

    #[test]
    fn test_player_serialization() {
        let player = rolled_player();
        let json = serde_json::to_string(&player).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, back);
    }
}
