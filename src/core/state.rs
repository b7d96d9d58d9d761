//! The game snapshot and its derived queries.
//!
//! ## GameState
//!
//! One immutable snapshot of the whole game: both rosters, the turn
//! pointer, the pot, the throw cap and the phase. The state machine
//! produces a fresh snapshot per intent; rosters use `im::Vector` so
//! cloning a snapshot is cheap. Observers treat every snapshot as frozen
//! and read the next one instead of mutating.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use super::score::Score;

/// Phase of the round lifecycle.
///
/// `Setup -> InitialRoll -> Rolling -> (RoundEnd | DeathMatch)`;
/// a death match may recurse into itself before reaching `RoundEnd`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Setup,
    InitialRoll,
    Rolling,
    RoundEnd,
    DeathMatch,
}

/// Full game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Main roster, in turn order once the initial roll has sorted it.
    pub players: Vector<Player>,

    /// Index into the roster the current phase addresses.
    pub current_player_index: usize,

    /// Shared drink-penalty accumulator.
    pub pot: u32,

    /// Throw budget for the round. 0 until the initial roll fixes it; the
    /// round's first player may lower it for everyone by stopping early.
    pub max_throws: u32,

    /// Set once a Mexico has been confirmed this round.
    pub mexico_mode: bool,

    pub phase: Phase,

    /// Round number (starts at 1).
    pub round_number: u32,

    /// Tied players fighting out the round's loser.
    /// Non-empty only while `phase == Phase::DeathMatch`.
    pub death_match_players: Vector<Player>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty pre-setup state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            players: Vector::new(),
            current_player_index: 0,
            pot: 0,
            max_throws: 0,
            mexico_mode: false,
            phase: Phase::Setup,
            round_number: 1,
            death_match_players: Vector::new(),
        }
    }

    /// The roster the current phase addresses: the death-match roster
    /// during a death match, the main roster otherwise.
    #[must_use]
    pub fn active_roster(&self) -> &Vector<Player> {
        if self.phase == Phase::DeathMatch {
            &self.death_match_players
        } else {
            &self.players
        }
    }

    pub(crate) fn active_roster_mut(&mut self) -> &mut Vector<Player> {
        if self.phase == Phase::DeathMatch {
            &mut self.death_match_players
        } else {
            &mut self.players
        }
    }

    /// The player addressed by the turn pointer, if the pointer is valid.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.active_roster().get(self.current_player_index)
    }

    pub(crate) fn current_player_mut(&mut self) -> Option<&mut Player> {
        let index = self.current_player_index;
        self.active_roster_mut().get_mut(index)
    }

    /// Look up a player on the main roster by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Main-roster players sharing the numerically lowest real score.
    ///
    /// Players without a score and players holding `Pointing` do not enter
    /// the computation. More than one result means a death match.
    #[must_use]
    pub fn lowest_score_players(&self) -> Vec<&Player> {
        let scored: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| matches!(p.score, Some(s) if s != Score::Pointing))
            .collect();

        let Some(min) = scored
            .iter()
            .filter_map(|p| p.score.map(Score::numeric_value))
            .min()
        else {
            return Vec::new();
        };

        scored
            .into_iter()
            .filter(|p| p.score.map(Score::numeric_value) == Some(min))
            .collect()
    }
}
