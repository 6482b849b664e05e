//! Turn state machine operations.
//!
//! All functions mutate the session in place and run to completion; the
//! engine assumes exclusive, single-threaded access (turn-based play is
//! sequential by nature). A rejected validation is an outcome, not an
//! error: state is left untouched and the caller corrects the tallies.

use crate::domain::ranking::{compute_ranking, RankEntry};
use crate::domain::rules::{max_rounds_for, valid_count_range, MIN_PLAYERS};
use crate::domain::scoring::round_points;
use crate::domain::state::{require_player, GameSession, Phase, Player, PlayerId};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

/// Result of a validate-and-advance attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvanceOutcome {
    /// Round committed; the session moved to Bidding for `round`.
    Advanced { round: u8 },
    /// Final round committed; the session is over.
    GameOver { ranking: Vec<RankEntry> },
    /// Reported tricks do not add up; nothing changed.
    Rejected {
        expected: u8,
        reported: u8,
        adjusted: u8,
    },
}

/// Enter the Scoring phase: snapshot every player's cumulative points so
/// previews can be shown without mutating stored totals, and reset the
/// kraken flag. No points move here.
pub fn begin_scoring(session: &mut GameSession) -> Result<(), DomainError> {
    if session.phase != Phase::Bidding {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "scoring already in progress",
        ));
    }
    session.points_baseline = session
        .players
        .iter()
        .map(|p| p.cumulative_points)
        .collect();
    session.kraken_discarded = false;
    session.phase = Phase::Scoring;
    Ok(())
}

/// Flip the kraken-discard flag. Only meaningful while scoring; returns
/// the new value.
pub fn toggle_kraken(session: &mut GameSession) -> Result<bool, DomainError> {
    if session.phase != Phase::Scoring {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "kraken applies to the scoring phase",
        ));
    }
    session.kraken_discarded = !session.kraken_discarded;
    Ok(session.kraken_discarded)
}

/// Adjust a player's bid by `delta`. Valid only while bidding; values
/// outside `0..=cards_this_round` are not applied (boundary is a no-op).
/// Returns the bid after the call.
pub fn adjust_bid(
    session: &mut GameSession,
    who: PlayerId,
    delta: i8,
) -> Result<u8, DomainError> {
    if session.phase != Phase::Bidding {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "bids are closed once scoring begins",
        ));
    }
    require_player(session, who, "adjust_bid")?;
    let range = valid_count_range(session.cards_this_round());
    let player = &mut session.players[who];
    let next = i16::from(player.bid) + i16::from(delta);
    if let Ok(next) = u8::try_from(next) {
        if range.contains(&next) {
            player.bid = next;
        }
    }
    Ok(player.bid)
}

/// Adjust a player's trick tally by `delta`. Valid only while scoring;
/// clamped the same way as bids. Returns the tally after the call.
pub fn adjust_tricks(
    session: &mut GameSession,
    who: PlayerId,
    delta: i8,
) -> Result<u8, DomainError> {
    if session.phase != Phase::Scoring {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "tricks are reported during scoring",
        ));
    }
    require_player(session, who, "adjust_tricks")?;
    let range = valid_count_range(session.cards_this_round());
    let player = &mut session.players[who];
    let next = i16::from(player.tricks_won) + i16::from(delta);
    if let Ok(next) = u8::try_from(next) {
        if range.contains(&next) {
            player.tricks_won = next;
        }
    }
    Ok(player.tricks_won)
}

/// Replace a player's bonus with an externally computed total (see
/// `domain::bonus`). Phase-independent; the new bonus only takes effect
/// through `round_points`, at preview or commit time.
pub fn apply_bonus(
    session: &mut GameSession,
    who: PlayerId,
    total: i32,
) -> Result<(), DomainError> {
    if total < 0 {
        return Err(DomainError::validation(
            ValidationKind::NegativeBonus,
            format!("bonus total must be >= 0, got {total}"),
        ));
    }
    require_player(session, who, "apply_bonus")?;
    session.players[who].bonus = total;
    Ok(())
}

/// Live "points if the round committed now" for one player.
///
/// While scoring this is the snapshot baseline plus the round formula;
/// outside scoring it is simply the stored total. Never mutates state.
pub fn preview_points(session: &GameSession, who: PlayerId) -> Result<i32, DomainError> {
    let player = require_player(session, who, "preview_points")?;
    if session.phase != Phase::Scoring {
        return Ok(player.cumulative_points);
    }
    let baseline = session
        .points_baseline
        .get(who)
        .copied()
        .unwrap_or(player.cumulative_points);
    Ok(baseline + round_delta(session, who)?)
}

/// Raw round points for display next to a player's row.
///
/// During bidding the bid is scored against itself (what the player earns
/// if they hit it); during scoring it is the actual reported tally.
pub fn round_delta(session: &GameSession, who: PlayerId) -> Result<i32, DomainError> {
    let player = require_player(session, who, "round_delta")?;
    let cards = session.cards_this_round();
    let taken = match session.phase {
        Phase::Bidding => player.bid,
        Phase::Scoring => player.tricks_won,
    };
    Ok(round_points(cards, player.bid, taken, player.bonus))
}

/// Validate the reported trick counts and, if they add up, commit the
/// round: award points from the baseline, then either advance to the next
/// round's Bidding phase or finish the game with a ranking.
///
/// On a mismatch nothing is mutated and the phase stays Scoring so the
/// caller can correct the tallies (or toggle the kraken) and retry.
pub fn validate_and_advance(session: &mut GameSession) -> Result<AdvanceOutcome, DomainError> {
    if session.game_over {
        return Err(DomainError::validation(
            ValidationKind::GameComplete,
            "the final round has already committed",
        ));
    }
    if session.phase != Phase::Scoring {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "nothing to validate while bidding",
        ));
    }

    let expected = session.cards_this_round();
    let reported: u8 = session.players.iter().map(|p| p.tricks_won).sum();
    let adjusted = reported + u8::from(session.kraken_discarded);

    if adjusted != expected {
        return Ok(AdvanceOutcome::Rejected {
            expected,
            reported,
            adjusted,
        });
    }

    // Commit: baseline + round formula for every player. A missing
    // baseline entry falls back to the stored total.
    for (idx, player) in session.players.iter_mut().enumerate() {
        let baseline = session
            .points_baseline
            .get(idx)
            .copied()
            .unwrap_or(player.cumulative_points);
        player.cumulative_points =
            baseline + round_points(expected, player.bid, player.tricks_won, player.bonus);
    }

    if session.current_round < session.max_rounds {
        for player in &mut session.players {
            player.reset_round_fields();
        }
        session.points_baseline.clear();
        session.kraken_discarded = false;
        session.current_round += 1;
        session.phase = Phase::Bidding;
        Ok(AdvanceOutcome::Advanced {
            round: session.current_round,
        })
    } else {
        // Final round: tallies are kept for display, but the session is
        // now terminal and rejects further transitions.
        session.game_over = true;
        Ok(AdvanceOutcome::GameOver {
            ranking: compute_ranking(&session.players),
        })
    }
}

/// Drop a player from the roster, renumber display order, and re-clamp
/// the round limit for the smaller table.
pub fn remove_player(session: &mut GameSession, who: PlayerId) -> Result<Player, DomainError> {
    if who >= session.players.len() {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player at index {who} (remove_player)"),
        ));
    }
    if session.players.len() <= MIN_PLAYERS {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("roster cannot shrink below {MIN_PLAYERS} players"),
        ));
    }
    let removed = session.players.remove(who);
    if !session.points_baseline.is_empty() {
        session.points_baseline.remove(who);
    }
    for (idx, player) in session.players.iter_mut().enumerate() {
        player.order = idx;
    }
    clamp_round_to_roster(session);
    Ok(removed)
}

/// Safety clamp after a roster-size change: if the current round now
/// exceeds the recomputed limit, pull it down. Not a scoring event.
pub fn clamp_round_to_roster(session: &mut GameSession) {
    session.max_rounds = max_rounds_for(session.players.len());
    if session.current_round > session.max_rounds {
        session.current_round = session.max_rounds;
    }
}
