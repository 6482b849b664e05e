use std::ops::RangeInclusive;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 12;

/// Maximum playable rounds for a roster size.
///
/// Large tables run out of cards earlier: the deck caps how many cards can
/// be dealt per player, so the schedule shortens as the table grows.
pub fn max_rounds_for(player_count: usize) -> u8 {
    match player_count {
        8 | 9 => 9,
        10 => 7,
        11 | 12 => 6,
        _ => 10,
    }
}

/// Cards dealt per player in a 1-based round: round n deals n cards.
pub fn cards_in_round(round_no: u8) -> u8 {
    round_no
}

/// Bids and trick tallies are both bounded by the cards in hand.
pub fn valid_count_range(cards: u8) -> RangeInclusive<u8> {
    0..=cards
}
