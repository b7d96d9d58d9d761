//! The turn/phase state machine.
//!
//! All intents re-validate their own preconditions and decline silently
//! when stale (wrong phase, exhausted throws, pending popup, ...). The
//! machine never raises an error for an invalid intent.
//!
//! The main round and the death match share one code path: every throw
//! intent addresses [`GameState::active_roster`], which the phase selects.
//! Pot accounting and the Hundred burn stay main-round-only inside
//! `confirm_score`.

use im::Vector;
use tracing::debug;

use crate::core::dice::{DiceRoll, DieSlot, DieSource};
use crate::core::player::{LockedDie, Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::score::Score;
use crate::core::state::{GameState, Phase};
use crate::engine::signals::{NavigationTarget, Signals};
use crate::rules::scoring;

/// Largest allowed roster.
pub const MAX_PLAYERS: usize = 10;

/// Throw budget at the start of every round and death match.
pub const DEFAULT_MAX_THROWS: u32 = 3;

/// Drinks added to the pot when a Mexico is confirmed.
pub const MEXICO_POT_BONUS: u32 = 5;

/// The game engine: one mutable holder of an immutable snapshot.
///
/// Intents mutate the held [`GameState`] transactionally; observers read
/// [`GameEngine::state`] or take an owned [`GameEngine::snapshot`] (O(1)
/// thanks to the persistent rosters) and must never mutate it in place.
pub struct GameEngine<R = GameRng> {
    state: GameState,
    dice: R,
    signals: Signals,
    next_player_id: u32,
}

impl GameEngine<GameRng> {
    /// Create an engine with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_dice(GameRng::new(seed))
    }
}

impl<R: DieSource> GameEngine<R> {
    /// Create an engine with an injected die source.
    #[must_use]
    pub fn with_dice(dice: R) -> Self {
        Self {
            state: GameState::new(),
            dice,
            signals: Signals::default(),
            next_player_id: 0,
        }
    }

    // === Observation ===

    /// The current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// An owned copy of the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// One-shot notification flags and the rolling indicator.
    #[must_use]
    pub fn signals(&self) -> &Signals {
        &self.signals
    }

    /// Consume the pending navigation signal, if any.
    pub fn take_navigation(&mut self) -> Option<NavigationTarget> {
        self.signals.navigation.take()
    }

    // === Setup ===

    /// Register a player. Returns the assigned id, or `None` if the name is
    /// blank or the roster is full.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        if self.state.phase != Phase::Setup {
            return None;
        }
        let name = name.trim();
        if name.is_empty() || self.state.players.len() >= MAX_PLAYERS {
            return None;
        }

        let id = PlayerId::new(self.next_player_id);
        self.next_player_id += 1;
        self.state.players.push_back(Player::new(id, name));
        Some(id)
    }

    /// Remove a player during setup.
    pub fn remove_player(&mut self, id: PlayerId) {
        if self.state.phase != Phase::Setup {
            return;
        }
        self.state.players = self
            .state
            .players
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
    }

    /// Leave setup and start the order-setting roll. Needs two players.
    pub fn start_initial_roll(&mut self) {
        if self.state.phase != Phase::Setup || self.state.players.len() < 2 {
            return;
        }

        self.state.phase = Phase::InitialRoll;
        self.state.current_player_index = 0;
        self.signals.navigation = Some(NavigationTarget::InitialRoll);
        debug!(players = self.state.players.len(), "initial roll started");
    }

    // === Initial roll ===

    /// Roll the single seed die for the current player.
    pub fn perform_initial_roll(&mut self) {
        if self.state.phase != Phase::InitialRoll {
            return;
        }
        let Some(player) = self.state.current_player() else {
            return;
        };
        if player.initial_roll.is_some() {
            return;
        }

        self.signals.rolling = true;
        let face = self.dice.roll_die();
        if let Some(p) = self.state.current_player_mut() {
            p.initial_roll = Some(face);
        }
        self.signals.rolling = false;
    }

    /// Move to the next seed roller; after the last one, fix the turn order
    /// and start the round.
    pub fn next_initial_roll(&mut self) {
        if self.state.phase != Phase::InitialRoll {
            return;
        }
        // The current player must have rolled before play moves on.
        match self.state.current_player() {
            Some(p) if p.initial_roll.is_some() => {}
            _ => return,
        }

        let next = self.state.current_player_index + 1;
        if next >= self.state.players.len() {
            self.determine_play_order();
        } else {
            self.state.current_player_index = next;
        }
    }

    fn determine_play_order(&mut self) {
        // Descending seed; the stable sort keeps registration order on ties.
        let mut sorted: Vec<Player> = self.state.players.iter().cloned().collect();
        sorted.sort_by(|a, b| {
            b.initial_roll
                .unwrap_or(0)
                .cmp(&a.initial_roll.unwrap_or(0))
        });
        for player in &mut sorted {
            player.reset_turn_state();
        }

        self.state.players = sorted.into_iter().collect();
        self.state.current_player_index = 0;
        self.state.max_throws = DEFAULT_MAX_THROWS;
        self.state.phase = Phase::Rolling;
        self.signals.navigation = Some(NavigationTarget::Game);
        debug!(round = self.state.round_number, "play order fixed");
    }

    // === Throwing (main round and death match) ===

    /// Throw the dice for the current player.
    ///
    /// A locked die keeps its face in its original slot; only the free slot
    /// re-rolls. A throw identical to the player's previous one raises the
    /// Duim notification and suppresses any special-roll popup for this
    /// throw; the throw still counts.
    pub fn roll_dice(&mut self) {
        if !self.in_throw_phase() || self.signals.popup_pending() {
            return;
        }
        let max_throws = self.state.max_throws;
        let Some(player) = self.state.current_player() else {
            return;
        };
        if player.throws_used >= max_throws {
            return;
        }
        let locked = player.locked_die;
        let previous = player.previous_dice;

        self.signals.rolling = true;
        let roll = match locked {
            Some(lock) => {
                let free = self.dice.roll_die();
                match lock.slot {
                    DieSlot::First => DiceRoll::new(lock.face, free),
                    DieSlot::Second => DiceRoll::new(free, lock.face),
                }
            }
            None => DiceRoll::new(self.dice.roll_die(), self.dice.roll_die()),
        };

        let duim = previous.is_some_and(|prev| prev.same_faces(roll));

        if let Some(p) = self.state.current_player_mut() {
            p.current_dice = Some(roll);
            p.previous_dice = Some(roll);
            p.throws_used += 1;
            p.has_rolled = true;
        }
        self.signals.rolling = false;

        if duim {
            debug!(%roll, "repeat throw");
            self.signals.duim_popup = true;
            return;
        }

        match scoring::score(roll.first, roll.second) {
            Score::Pointing => self.signals.pointing_popup = true,
            Score::Mexico => self.signals.mexico_popup = true,
            Score::Sand => self.signals.sand_popup = true,
            _ => {}
        }
    }

    /// Lock a die showing `face` in the given slot.
    ///
    /// No-op unless the face qualifies, the player holds no lock, and the
    /// current throw is not the Pointing pair (that throw is about to be
    /// voided).
    pub fn lock_die(&mut self, face: u8, slot: DieSlot) {
        if !self.in_throw_phase() || self.signals.popup_pending() {
            return;
        }
        if !scoring::can_lock_die(face) {
            return;
        }
        let Some(player) = self.state.current_player() else {
            return;
        };
        if player.locked_die.is_some() {
            return;
        }
        if player
            .current_dice
            .is_some_and(|d| scoring::score(d.first, d.second) == Score::Pointing)
        {
            return;
        }

        if let Some(p) = self.state.current_player_mut() {
            p.locked_die = Some(LockedDie { face, slot });
        }
    }

    /// Clear the current player's lock unconditionally.
    pub fn unlock_die(&mut self) {
        if !self.in_throw_phase() {
            return;
        }
        if let Some(p) = self.state.current_player_mut() {
            p.locked_die = None;
        }
    }

    /// Finalize the current throw as the player's round score and advance.
    ///
    /// Main round only: Mexico grows the pot by [`MEXICO_POT_BONUS`] and
    /// revokes every other player's Hundred; a Hundred adds its drinks to
    /// the pot. The death match records the score and leaves the pot alone.
    pub fn confirm_score(&mut self) {
        if !self.in_throw_phase() || self.signals.popup_pending() {
            return;
        }
        let Some(player) = self.state.current_player() else {
            return;
        };
        let Some(dice) = player.current_dice else {
            return;
        };
        if player.score.is_some() {
            return;
        }
        let throws = player.throws_used;

        let score = scoring::score(dice.first, dice.second);
        if self.state.phase == Phase::DeathMatch {
            if let Some(p) = self.state.current_player_mut() {
                p.score = Some(score);
            }
        } else {
            match score {
                Score::Mexico => {
                    self.state.pot += MEXICO_POT_BONUS;
                    self.state.mexico_mode = true;
                    // Mexico burns every outstanding Hundred
                    let current = self.state.current_player_index;
                    for (i, p) in self.state.players.iter_mut().enumerate() {
                        if i == current {
                            p.score = Some(Score::Mexico);
                        } else if matches!(p.score, Some(Score::Hundred { .. })) {
                            p.score = None;
                        }
                    }
                }
                Score::Hundred { drinks, .. } => {
                    self.state.pot += u32::from(drinks);
                    if let Some(p) = self.state.current_player_mut() {
                        p.score = Some(score);
                    }
                }
                _ => {
                    if let Some(p) = self.state.current_player_mut() {
                        p.score = Some(score);
                    }
                }
            }
        }

        self.cap_max_throws_if_leader(throws);
        debug!(%score, pot = self.state.pot, "score confirmed");
        self.next_player();
    }

    /// Advance the turn pointer; past the end of the active roster the
    /// round (or death match) resolves.
    pub fn next_player(&mut self) {
        if self.signals.popup_pending() {
            return;
        }
        let next = self.state.current_player_index + 1;
        match self.state.phase {
            Phase::DeathMatch => {
                if next >= self.state.death_match_players.len() {
                    self.finish_death_match();
                } else {
                    self.state.current_player_index = next;
                }
            }
            Phase::Rolling => {
                if next >= self.state.players.len() {
                    self.end_round();
                } else {
                    self.state.current_player_index = next;
                }
            }
            _ => {}
        }
    }

    /// `roll_dice`, scoped to the death-match roster by the phase.
    pub fn roll_death_match_dice(&mut self) {
        self.roll_dice();
    }

    /// `next_player`, scoped to the death-match roster by the phase.
    pub fn next_death_match_player(&mut self) {
        self.next_player();
    }

    // === Popup acknowledgements ===

    /// Acknowledge the Pointing popup and void the throw: the throw count
    /// is restored, the dice and any lock cleared. The player rolls again.
    pub fn dismiss_pointing_popup(&mut self) {
        if !self.signals.pointing_popup {
            return;
        }
        self.signals.pointing_popup = false;

        if let Some(p) = self.state.current_player_mut() {
            p.throws_used = p.throws_used.saturating_sub(1);
            p.current_dice = None;
            p.locked_die = None;
        }
    }

    /// Acknowledge the Mexico popup; the throw is finalized as a score.
    pub fn dismiss_mexico_popup(&mut self) {
        if !self.signals.mexico_popup {
            return;
        }
        self.signals.mexico_popup = false;
        self.cap_on_special_acknowledge();
        self.confirm_score();
    }

    /// Acknowledge the Sand popup; the throw is finalized as a score.
    pub fn dismiss_sand_popup(&mut self) {
        if !self.signals.sand_popup {
            return;
        }
        self.signals.sand_popup = false;
        self.cap_on_special_acknowledge();
        self.confirm_score();
    }

    /// Acknowledge the Duim popup. Informational only.
    pub fn dismiss_duim_popup(&mut self) {
        self.signals.duim_popup = false;
    }

    // === Round end ===

    /// Reset everything for the next round and return to play.
    pub fn start_new_round(&mut self) {
        if self.state.phase != Phase::RoundEnd {
            return;
        }

        for p in self.state.players.iter_mut() {
            p.reset_for_new_round();
        }
        self.state.current_player_index = 0;
        self.state.pot = 0;
        self.state.max_throws = DEFAULT_MAX_THROWS;
        self.state.mexico_mode = false;
        self.state.phase = Phase::Rolling;
        self.state.round_number += 1;
        self.state.death_match_players = Vector::new();
        self.signals.navigation = Some(NavigationTarget::Game);
        debug!(round = self.state.round_number, "new round started");
    }

    // === Internals ===

    fn in_throw_phase(&self) -> bool {
        matches!(self.state.phase, Phase::Rolling | Phase::DeathMatch)
    }

    /// The round's opener caps the throw budget for everyone after them.
    fn cap_max_throws_if_leader(&mut self, throws_used: u32) {
        if self.state.current_player_index == 0 {
            self.state.max_throws = throws_used;
        }
    }

    fn cap_on_special_acknowledge(&mut self) {
        if self.state.current_player_index != 0 {
            return;
        }
        if let Some(throws) = self.state.current_player().map(|p| p.throws_used) {
            self.state.max_throws = throws;
        }
    }

    fn end_round(&mut self) {
        let tied: Vec<Player> = self
            .state
            .lowest_score_players()
            .into_iter()
            .cloned()
            .collect();

        if tied.len() > 1 {
            debug!(entrants = tied.len(), "round tied, entering death match");
            self.state.death_match_players = tied
                .into_iter()
                .map(|mut p| {
                    p.reset_turn_state();
                    p
                })
                .collect();
            self.state.phase = Phase::DeathMatch;
            self.state.current_player_index = 0;
            self.state.max_throws = DEFAULT_MAX_THROWS;
        } else {
            debug!(pot = self.state.pot, "round over");
            self.state.phase = Phase::RoundEnd;
            self.signals.navigation = Some(NavigationTarget::Result);
        }
    }

    fn finish_death_match(&mut self) {
        let entrants = self.state.death_match_players.clone();
        if entrants.iter().all(|p| p.score.is_none()) {
            return;
        }

        // Merge every entrant's final score back onto the main roster.
        for p in self.state.players.iter_mut() {
            if let Some(entrant) = entrants.iter().find(|e| e.id == p.id) {
                p.score = entrant.score;
            }
        }

        // Pointing never ranks; entrants who only managed a void throw
        // replay against each other if nobody posted a real score.
        let scored: Vec<Player> = entrants
            .iter()
            .filter(|p| matches!(p.score, Some(s) if s != Score::Pointing))
            .cloned()
            .collect();
        let tied: Vec<Player> = match scored
            .iter()
            .filter_map(|p| p.score.map(Score::numeric_value))
            .min()
        {
            Some(lowest) => scored
                .into_iter()
                .filter(|p| p.score.map(Score::numeric_value) == Some(lowest))
                .collect(),
            None => entrants
                .iter()
                .filter(|p| p.score.is_some())
                .cloned()
                .collect(),
        };

        if tied.len() > 1 {
            debug!(entrants = tied.len(), "death match tied, recursing");
            self.state.death_match_players = tied
                .into_iter()
                .map(|mut p| {
                    p.reset_turn_state();
                    p
                })
                .collect();
            self.state.current_player_index = 0;
            self.state.max_throws = DEFAULT_MAX_THROWS;
        } else {
            debug!("death match resolved");
            self.state.death_match_players = Vector::new();
            self.state.phase = Phase::RoundEnd;
            self.signals.navigation = Some(NavigationTarget::Result);
        }
    }
}
