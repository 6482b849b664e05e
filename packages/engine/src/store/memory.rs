//! In-memory store, the reference implementation of the storage traits.

use crate::domain::state::Player;
use crate::errors::domain::DomainError;
use crate::store::{name_key, PlayerProfile, ProfileStore, RosterStore};

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    roster: Vec<Player>,
    profiles: Vec<PlayerProfile>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RosterStore for MemoryStore {
    fn load_roster(&self) -> Result<Vec<Player>, DomainError> {
        Ok(self.roster.clone())
    }

    fn save_roster(&mut self, players: &[Player]) -> Result<(), DomainError> {
        self.roster = players.to_vec();
        Ok(())
    }
}

impl ProfileStore for MemoryStore {
    fn find_profile(&self, name: &str) -> Result<Option<PlayerProfile>, DomainError> {
        let key = name_key(name);
        Ok(self
            .profiles
            .iter()
            .find(|p| name_key(&p.name) == key)
            .cloned())
    }

    fn save_profile(&mut self, profile: PlayerProfile) -> Result<(), DomainError> {
        let key = name_key(&profile.name);
        match self.profiles.iter_mut().find(|p| name_key(&p.name) == key) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    fn remove_profile(&mut self, name: &str) -> Result<Option<PlayerProfile>, DomainError> {
        let key = name_key(name);
        let found = self.profiles.iter().position(|p| name_key(&p.name) == key);
        Ok(found.map(|idx| self.profiles.remove(idx)))
    }

    fn list_profiles(&self) -> Result<Vec<PlayerProfile>, DomainError> {
        Ok(self.profiles.clone())
    }
}
