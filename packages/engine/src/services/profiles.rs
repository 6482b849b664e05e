//! Cross-game profile ledger operations.
//!
//! Free functions generic over the profile store, mirroring how the
//! roster side stays generic over its store.

use time::OffsetDateTime;
use tracing::info;

use crate::domain::ranking::RankEntry;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::store::{name_key, PlayerProfile, ProfileStore};

/// Fold a finished game into the ledger: every ranked player's profile
/// gains the game's points and one played game. Profiles are created on
/// first appearance.
pub fn record_game_result<S: ProfileStore>(
    store: &mut S,
    ranking: &[RankEntry],
) -> Result<(), DomainError> {
    let now = OffsetDateTime::now_utc();
    for entry in ranking {
        let mut profile = store
            .find_profile(&entry.name)?
            .unwrap_or_else(|| PlayerProfile::new(entry.name.trim()));
        profile.cumulative_points += entry.points;
        profile.played_count += 1;
        profile.last_played_at = now;
        store.save_profile(profile)?;
    }
    info!(players = ranking.len(), "Game result recorded to ledger");
    Ok(())
}

/// Profiles ordered by cumulative points descending, truncated to `n`.
pub fn top_profiles<S: ProfileStore>(
    store: &S,
    n: usize,
) -> Result<Vec<PlayerProfile>, DomainError> {
    let mut profiles = store.list_profiles()?;
    profiles.sort_by(|a, b| b.cumulative_points.cmp(&a.cumulative_points));
    profiles.truncate(n);
    Ok(profiles)
}

/// Reset a profile's cumulative point counter to zero.
pub fn reset_profile<S: ProfileStore>(store: &mut S, name: &str) -> Result<(), DomainError> {
    let mut profile = store.find_profile(name)?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Profile, format!("no profile named {name:?}"))
    })?;
    profile.cumulative_points = 0;
    store.save_profile(profile)?;
    Ok(())
}

/// Rename a profile, enforcing ledger-wide name uniqueness.
pub fn rename_profile<S: ProfileStore>(
    store: &mut S,
    old_name: &str,
    new_name: &str,
) -> Result<(), DomainError> {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyName,
            "profile name must not be empty",
        ));
    }
    let mut profile = store.find_profile(old_name)?.ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Profile,
            format!("no profile named {old_name:?}"),
        )
    })?;
    if name_key(trimmed) != name_key(old_name) && store.find_profile(trimmed)?.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::DuplicateName,
            format!("a profile named {trimmed:?} already exists"),
        ));
    }
    store.remove_profile(old_name)?;
    profile.name = trimmed.to_string();
    store.save_profile(profile)?;
    Ok(())
}
