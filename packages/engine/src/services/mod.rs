//! Orchestration over domain logic and the persistence boundary.

pub mod game_flow;
pub mod players;
pub mod profiles;

#[cfg(test)]
mod tests_profiles;
