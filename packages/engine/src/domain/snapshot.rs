//! Public snapshot API for observing a session without exposing internals.
//!
//! Callers render rows straight from this view: per-player preview points
//! (baseline + live round formula) and the raw round delta, plus the
//! session header. Building a snapshot never mutates the session.

use serde::{Deserialize, Serialize};

use crate::domain::session::{preview_points, round_delta};
use crate::domain::state::{GameSession, Phase};

/// Public info about a single roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub name: String,
    pub order: usize,
    pub bid: u8,
    pub tricks_won: u8,
    pub bonus: i32,
    pub cumulative_points: i32,
    /// Points this player would have if the round committed right now.
    pub preview_points: i32,
    /// This round's raw award/penalty for display as "(+x)" / "(-x)".
    pub round_delta: i32,
}

/// Session-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHeader {
    pub current_round: u8,
    pub max_rounds: u8,
    pub cards_in_round: u8,
    pub phase: Phase,
    pub kraken_discarded: bool,
}

/// Top-level snapshot combining header and roster rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionHeader,
    pub players: Vec<PlayerPublic>,
}

pub fn session_snapshot(session: &GameSession) -> SessionSnapshot {
    let players = session
        .players
        .iter()
        .enumerate()
        .map(|(idx, p)| PlayerPublic {
            name: p.name.clone(),
            order: p.order,
            bid: p.bid,
            tricks_won: p.tricks_won,
            bonus: p.bonus,
            cumulative_points: p.cumulative_points,
            preview_points: preview_points(session, idx)
                .unwrap_or(p.cumulative_points),
            round_delta: round_delta(session, idx).unwrap_or(0),
        })
        .collect();
    SessionSnapshot {
        session: SessionHeader {
            current_round: session.current_round,
            max_rounds: session.max_rounds,
            cards_in_round: session.cards_this_round(),
            phase: session.phase,
            kraken_discarded: session.kraken_discarded,
        },
        players,
    }
}
