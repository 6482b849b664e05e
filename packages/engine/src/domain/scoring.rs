//! Pure round-points calculator.

/// Points a player earns (or loses) for a single round.
///
/// Scoring rules:
/// - bid 0, took 0: `10 * cards_in_round` (a correct zero-bid pays the
///   full round value)
/// - bid 0, took any: `-10 * cards_in_round`
/// - took exactly the bid: `20 * bid + bonus`
/// - otherwise: `-10 * |took - bid|`; the capture bonus never applies on a
///   missed bid
///
/// Pure and total over all inputs; no state is read or written.
pub fn round_points(cards_in_round: u8, bid: u8, tricks_won: u8, bonus: i32) -> i32 {
    let cards = i32::from(cards_in_round);
    let bid = i32::from(bid);
    let tricks = i32::from(tricks_won);

    if bid == 0 && tricks == 0 {
        cards * 10
    } else if bid == 0 {
        -(cards * 10)
    } else if tricks == bid {
        20 * bid + bonus
    } else {
        -((tricks - bid).abs() * 10)
    }
}
