//! Persistence boundary.
//!
//! Storage is an external collaborator: the engine only needs to load and
//! save the roster and to feed finished games into a cross-game profile
//! ledger. Embedders implement these traits over whatever durable layer
//! they have; `MemoryStore` serves tests and non-durable embedders.
//!
//! Saves are fire-and-forget-safe by contract: a failed save must never
//! corrupt in-memory state, which stays authoritative until the next
//! successful save (the service layer logs and carries on).

pub mod memory;
pub mod profile;

pub use memory::MemoryStore;
pub use profile::PlayerProfile;

use crate::domain::state::Player;
use crate::errors::domain::DomainError;

/// Canonical key for player/profile names: trimmed, case-insensitive.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Durable home of the active roster.
pub trait RosterStore {
    fn load_roster(&self) -> Result<Vec<Player>, DomainError>;
    fn save_roster(&mut self, players: &[Player]) -> Result<(), DomainError>;
}

/// Cross-game ledger keyed by player name (see [`name_key`]).
pub trait ProfileStore {
    /// Look up a profile by name, case-insensitively.
    fn find_profile(&self, name: &str) -> Result<Option<PlayerProfile>, DomainError>;
    /// Insert or replace the profile whose name matches (case-insensitively).
    fn save_profile(&mut self, profile: PlayerProfile) -> Result<(), DomainError>;
    /// Delete a profile, returning it if it existed.
    fn remove_profile(&mut self, name: &str) -> Result<Option<PlayerProfile>, DomainError>;
    fn list_profiles(&self) -> Result<Vec<PlayerProfile>, DomainError>;
}
