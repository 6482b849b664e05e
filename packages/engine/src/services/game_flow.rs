//! Game lifecycle orchestration: start/resume, round advancement, result
//! recording, persistence.
//!
//! Persistence is deliberately non-fatal here: in-memory state is
//! authoritative, and a failed save is logged and survived. The caller
//! may retry or surface a warning; the session keeps playing either way.

use tracing::{debug, info, warn};

use crate::domain::session::{self, AdvanceOutcome};
use crate::domain::state::{GameSession, Phase, Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::{players, profiles};
use crate::store::{ProfileStore, RosterStore};

/// Session lifecycle service over a storage backend.
pub struct GameFlowService<S> {
    store: S,
}

impl<S: RosterStore + ProfileStore> GameFlowService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Start a fresh game: `player_count` players with default names,
    /// round 1, Bidding. Replaces whatever roster was stored.
    pub fn start_game(&mut self, player_count: usize) -> Result<GameSession, DomainError> {
        let session = GameSession::new(player_count)?;
        info!(
            player_count,
            max_rounds = session.max_rounds,
            "New game started"
        );
        self.persist_roster(&session);
        Ok(session)
    }

    /// Rebuild the session from the stored roster. `current_round` and
    /// `phase` are the scalars the embedder persisted alongside it.
    pub fn resume_game(
        &mut self,
        current_round: u8,
        phase: Phase,
    ) -> Result<GameSession, DomainError> {
        let roster = self.store.load_roster()?;
        if roster.is_empty() {
            return Err(DomainError::not_found(
                NotFoundKind::Roster,
                "no stored roster to resume",
            ));
        }
        let session = GameSession::with_roster(roster, current_round, phase)?;
        info!(
            round = session.current_round,
            players = session.player_count(),
            "Game resumed"
        );
        Ok(session)
    }

    /// Enter the Scoring phase (see `domain::session::begin_scoring`).
    pub fn begin_scoring(&mut self, session: &mut GameSession) -> Result<(), DomainError> {
        session::begin_scoring(session)?;
        debug!(round = session.current_round, "Transition: Bidding -> Scoring");
        Ok(())
    }

    /// Validate reported tricks and advance the round. On a committed
    /// round the roster is saved; at game over the final ranking is also
    /// folded into the profile ledger. Both writes are non-fatal.
    pub fn validate_and_advance(
        &mut self,
        session: &mut GameSession,
    ) -> Result<AdvanceOutcome, DomainError> {
        let outcome = session::validate_and_advance(session)?;
        match &outcome {
            AdvanceOutcome::Advanced { round } => {
                self.persist_roster(session);
                info!(round, "Round committed, next round open");
                debug!("Transition: Scoring -> Bidding");
            }
            AdvanceOutcome::GameOver { ranking } => {
                self.persist_roster(session);
                if let Err(err) = profiles::record_game_result(&mut self.store, ranking) {
                    warn!(%err, "Failed to record game result; ledger not updated");
                }
                info!(rounds_played = session.current_round, "Game completed");
                debug!("Transition: Scoring -> GameOver");
            }
            AdvanceOutcome::Rejected {
                expected,
                reported,
                adjusted,
            } => {
                debug!(expected, reported, adjusted, "Trick count mismatch, round blocked");
            }
        }
        Ok(outcome)
    }

    /// Rename a player (uniqueness-checked) and persist the roster.
    pub fn rename_player(
        &mut self,
        session: &mut GameSession,
        who: PlayerId,
        proposed: &str,
    ) -> Result<(), DomainError> {
        players::rename_player(session, who, proposed)?;
        self.persist_roster(session);
        Ok(())
    }

    /// Reorder the roster and persist it.
    pub fn move_player(
        &mut self,
        session: &mut GameSession,
        from: PlayerId,
        to: PlayerId,
    ) -> Result<(), DomainError> {
        players::move_player(session, from, to)?;
        self.persist_roster(session);
        Ok(())
    }

    /// Drop a player, re-clamp the round limit, persist the roster.
    pub fn remove_player(
        &mut self,
        session: &mut GameSession,
        who: PlayerId,
    ) -> Result<Player, DomainError> {
        let removed = session::remove_player(session, who)?;
        info!(
            name = %removed.name,
            max_rounds = session.max_rounds,
            "Player removed, round limit re-clamped"
        );
        self.persist_roster(session);
        Ok(removed)
    }

    /// Save the roster, tolerating failure: in-memory state stays
    /// authoritative until the next successful save.
    pub fn persist_roster(&mut self, session: &GameSession) {
        if let Err(err) = self.store.save_roster(&session.players) {
            warn!(%err, "Roster save failed; in-memory state remains authoritative");
        }
    }
}
