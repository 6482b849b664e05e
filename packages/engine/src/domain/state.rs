use serde::{Deserialize, Serialize};

use crate::domain::rules::{cards_in_round, max_rounds_for, MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Index into the session roster.
pub type PlayerId = usize;

/// Session phases. Each round alternates bidding and scoring; the caller
/// drives the transitions explicitly.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Players declare how many tricks they expect to win.
    Bidding,
    /// Players report tricks actually won; totals are validated before the
    /// round may commit.
    Scoring,
}

/// One participant in the current game.
///
/// `bid`, `tricks_won` and `bonus` are per-round transients, reset when a
/// new round begins. `cumulative_points` persists across rounds and is
/// only written when a round commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub bid: u8,
    pub tricks_won: u8,
    pub bonus: i32,
    pub cumulative_points: i32,
    /// Stable display/turn order; never affects scoring.
    pub order: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, order: usize) -> Self {
        Self {
            name: name.into(),
            bid: 0,
            tricks_won: 0,
            bonus: 0,
            cumulative_points: 0,
            order,
        }
    }

    /// Reset the per-round transients for a fresh round.
    pub fn reset_round_fields(&mut self) {
        self.bid = 0;
        self.tricks_won = 0;
        self.bonus = 0;
    }
}

/// The single active game.
///
/// Owns the roster and the round/phase scalars; everything needed to
/// resume a session is the roster plus `current_round` and `phase`
/// (`points_baseline` is re-derivable, see `session`).
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    /// 1-based round counter.
    pub current_round: u8,
    /// Derived from the roster size at game start; re-clamped on shrink.
    pub max_rounds: u8,
    pub phase: Phase,
    /// One trick was discarded out of play this round; the validation sum
    /// is offset by one. Reset whenever Bidding begins.
    pub kraken_discarded: bool,
    /// Snapshot of every player's `cumulative_points` taken when Scoring
    /// began, indexed like `players`. Empty outside the Scoring phase.
    /// Lets previews be recomputed any number of times without touching
    /// the stored totals.
    pub points_baseline: Vec<i32>,
    /// Set when the final round commits. A finished session keeps its
    /// tallies for display but accepts no further transitions.
    pub game_over: bool,
    pub players: Vec<Player>,
}

impl GameSession {
    /// Start a fresh game with default player names, round 1, Bidding.
    pub fn new(player_count: usize) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {player_count}"),
            ));
        }
        let players = (0..player_count)
            .map(|i| Player::new(format!("Player {}", i + 1), i))
            .collect();
        Ok(Self {
            current_round: 1,
            max_rounds: max_rounds_for(player_count),
            phase: Phase::Bidding,
            kraken_discarded: false,
            points_baseline: Vec::new(),
            game_over: false,
            players,
        })
    }

    /// Rebuild a session around an existing roster, e.g. one loaded from
    /// storage. Round and phase come from the caller's stored scalars; the
    /// round is clamped to the roster's limit.
    pub fn with_roster(
        players: Vec<Player>,
        current_round: u8,
        phase: Phase,
    ) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("roster has {} players", players.len()),
            ));
        }
        let max_rounds = max_rounds_for(players.len());
        let points_baseline = match phase {
            // Totals are pre-commit by construction, so they double as the
            // baseline when resuming mid-scoring.
            Phase::Scoring => players.iter().map(|p| p.cumulative_points).collect(),
            Phase::Bidding => Vec::new(),
        };
        Ok(Self {
            current_round: current_round.clamp(1, max_rounds),
            max_rounds,
            phase,
            kraken_discarded: false,
            points_baseline,
            game_over: false,
            players,
        })
    }

    /// Cards dealt per player this round.
    pub fn cards_this_round(&self) -> u8 {
        cards_in_round(self.current_round)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

pub fn require_player<'a>(
    session: &'a GameSession,
    who: PlayerId,
    ctx: &'static str,
) -> Result<&'a Player, DomainError> {
    session.players.get(who).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("no player at index {who} ({ctx})"),
        )
    })
}
