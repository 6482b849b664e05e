//! Capture-bonus catalog.
//!
//! Bonuses are tallied from in-round captures and applied as a single
//! total on the player; the total only pays out when the bid is hit
//! exactly (see `scoring::round_points`).

use serde::{Deserialize, Serialize};

/// Points per pirate captured by the Skull King.
pub const PIRATE_CAPTURE_POINTS: i32 = 30;
/// Points per mermaid captured.
pub const MERMAID_CAPTURE_POINTS: i32 = 20;
/// Points for capturing the Skull King with a mermaid.
pub const SKULL_KING_CAPTURE_POINTS: i32 = 40;
/// Points for winning a colored 14 (yellow, purple or green).
pub const COLORED_FOURTEEN_POINTS: i32 = 10;
/// Points for winning the black 14.
pub const BLACK_FOURTEEN_POINTS: i32 = 20;

/// Upper bounds on capture counts within one round.
pub const MAX_PIRATES_CAPTURED: u8 = 6;
pub const MAX_MERMAIDS_CAPTURED: u8 = 2;

/// Per-round capture counts for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTally {
    /// Pirates captured by the Skull King (0..=6).
    pub pirates_captured: u8,
    /// Mermaids captured (0..=2).
    pub mermaids_captured: u8,
    /// Skull King captured by a mermaid.
    pub skull_king_captured: bool,
    /// The 14 of each colored suit, each at most once per round.
    pub yellow_fourteen: bool,
    pub purple_fourteen: bool,
    pub green_fourteen: bool,
    /// The black 14 pays double a colored one.
    pub black_fourteen: bool,
}

impl BonusTally {
    /// Total bonus points; capture counts are clamped to their per-round
    /// maxima rather than rejected.
    pub fn total(&self) -> i32 {
        let pirates = i32::from(self.pirates_captured.min(MAX_PIRATES_CAPTURED));
        let mermaids = i32::from(self.mermaids_captured.min(MAX_MERMAIDS_CAPTURED));
        let mut total = pirates * PIRATE_CAPTURE_POINTS + mermaids * MERMAID_CAPTURE_POINTS;
        if self.skull_king_captured {
            total += SKULL_KING_CAPTURE_POINTS;
        }
        for &flag in [
            self.yellow_fourteen,
            self.purple_fourteen,
            self.green_fourteen,
        ]
        .iter()
        {
            if flag {
                total += COLORED_FOURTEEN_POINTS;
            }
        }
        if self.black_fourteen {
            total += BLACK_FOURTEEN_POINTS;
        }
        total
    }
}
