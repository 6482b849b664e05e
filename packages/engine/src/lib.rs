#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod domain;
pub mod errors;
pub mod services;
pub mod store;


// Re-exports for public API
pub use domain::ranking::{compute_ranking, RankEntry};
pub use domain::rules::{cards_in_round, max_rounds_for, MAX_PLAYERS, MIN_PLAYERS};
pub use domain::scoring::round_points;
pub use domain::session::AdvanceOutcome;
pub use domain::state::{GameSession, Phase, Player};
pub use errors::DomainError;
pub use services::game_flow::GameFlowService;
pub use store::{MemoryStore, PlayerProfile, ProfileStore, RosterStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
