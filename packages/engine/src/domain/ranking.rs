//! End-of-game competition ranking.

use serde::{Deserialize, Serialize};

use crate::domain::state::Player;

/// One row of the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    /// Competition rank: ties share a rank and the next distinct rank is
    /// the 1-based position, so [750, 500, 300, 300, 100] ranks 1-2-3-3-5.
    pub rank: usize,
    pub name: String,
    pub points: i32,
}

/// Rank players by cumulative points, descending.
///
/// The sort is stable, so equal totals keep their prior roster order; no
/// secondary tie-break key is applied.
pub fn compute_ranking(players: &[Player]) -> Vec<RankEntry> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by(|a, b| b.cumulative_points.cmp(&a.cumulative_points));

    let mut ranking = Vec::with_capacity(sorted.len());
    let mut last_points: Option<i32> = None;
    let mut last_rank = 0;
    for (pos, player) in sorted.iter().enumerate() {
        if last_points != Some(player.cumulative_points) {
            last_rank = pos + 1;
            last_points = Some(player.cumulative_points);
        }
        ranking.push(RankEntry {
            rank: last_rank,
            name: player.name.clone(),
            points: player.cumulative_points,
        });
    }
    ranking
}
