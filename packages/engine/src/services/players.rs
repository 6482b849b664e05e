//! Roster-level helpers: renaming with the uniqueness policy, reordering.
//!
//! Names are unique per session, compared trimmed and case-insensitively.
//! The uniqueness check runs here, before any mutation reaches the
//! session; the domain layer never re-detects duplicates.

use crate::domain::state::{GameSession, Player, PlayerId};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::store::name_key;

/// Whether `proposed` can be used without colliding with an existing
/// player name. `skip` exempts the player being renamed.
pub fn name_is_available(players: &[Player], proposed: &str, skip: Option<PlayerId>) -> bool {
    let key = name_key(proposed);
    players
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != skip)
        .all(|(_, p)| name_key(&p.name) != key)
}

/// Rename a player. The stored name is the trimmed form.
pub fn rename_player(
    session: &mut GameSession,
    who: PlayerId,
    proposed: &str,
) -> Result<(), DomainError> {
    let trimmed = proposed.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyName,
            "player name must not be empty",
        ));
    }
    if who >= session.players.len() {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player at index {who} (rename_player)"),
        ));
    }
    if !name_is_available(&session.players, trimmed, Some(who)) {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateName,
            format!("a player named {trimmed:?} already exists"),
        ));
    }
    session.players[who].name = trimmed.to_string();
    Ok(())
}

/// Move a player to a new roster position and renumber display order.
/// `to` is clamped to the roster bounds.
pub fn move_player(
    session: &mut GameSession,
    from: PlayerId,
    to: PlayerId,
) -> Result<(), DomainError> {
    if from >= session.players.len() {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player at index {from} (move_player)"),
        ));
    }
    let to = to.min(session.players.len() - 1);
    let player = session.players.remove(from);
    session.players.insert(to, player);
    // The baseline is indexed like the roster; keep it aligned.
    if !session.points_baseline.is_empty() {
        let baseline = session.points_baseline.remove(from);
        session.points_baseline.insert(to, baseline);
    }
    for (idx, player) in session.players.iter_mut().enumerate() {
        player.order = idx;
    }
    Ok(())
}
