//! Domain layer: pure game logic types and helpers.

pub mod bonus;
pub mod ranking;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use bonus::BonusTally;
pub use ranking::{compute_ranking, RankEntry};
pub use rules::{cards_in_round, max_rounds_for, MAX_PLAYERS, MIN_PLAYERS};
pub use scoring::round_points;
pub use session::AdvanceOutcome;
pub use snapshot::{session_snapshot, SessionSnapshot};
pub use state::{GameSession, Phase, Player, PlayerId};
