use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Cross-game identity: one row of the external ledger, keyed by name.
/// Updated once per finished game and managed from the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub cumulative_points: i32,
    pub played_count: u32,
    pub last_played_at: OffsetDateTime,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cumulative_points: 0,
            played_count: 0,
            last_played_at: OffsetDateTime::now_utc(),
        }
    }
}
