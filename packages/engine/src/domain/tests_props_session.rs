//! Property tests for the validate-and-advance transition.
//!
//! Properties tested:
//! - any trick split summing to the round's cards commits, and every
//!   player's total equals baseline + the round formula
//! - an off-by-one sum (kraken toggled over a complete split) rejects and
//!   leaves the roster untouched
//! - previews agree with the totals a commit would produce

use proptest::prelude::*;

use crate::domain::scoring::round_points;
use crate::domain::session::{
    begin_scoring, preview_points, toggle_kraken, validate_and_advance, AdvanceOutcome,
};
use crate::domain::state::GameSession;
use crate::domain::{test_gens, test_prelude};

fn session_with(bids: &[u8], tricks: &[u8], round_no: u8) -> GameSession {
    let mut session = GameSession::new(bids.len()).expect("generator stays in range");
    session.current_round = round_no.min(session.max_rounds);
    for (player, &bid) in session.players.iter_mut().zip(bids) {
        player.bid = bid;
    }
    begin_scoring(&mut session).expect("fresh session is bidding");
    for (player, &taken) in session.players.iter_mut().zip(tricks) {
        player.tricks_won = taken;
    }
    session
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_complete_split_commits_with_formula_totals(
        (count, round_no, bids, tricks) in (test_gens::player_count(), 1..=6u8)
            .prop_flat_map(|(count, round_no)| {
                (
                    Just(count),
                    Just(round_no),
                    test_gens::bids(count, round_no),
                    test_gens::trick_split(count, round_no),
                )
            }),
    ) {
        let mut session = session_with(&bids, &tricks, round_no);
        let cards = session.cards_this_round();
        let baseline: Vec<i32> = session.points_baseline.clone();

        let outcome = validate_and_advance(&mut session).unwrap();
        prop_assert!(
            !matches!(outcome, AdvanceOutcome::Rejected { .. }),
            "complete split must commit"
        );

        for (idx, player) in session.players.iter().enumerate() {
            let expected =
                baseline[idx] + round_points(cards, bids[idx], tricks[idx], 0);
            prop_assert_eq!(player.cumulative_points, expected);
        }
    }

    #[test]
    fn prop_overshoot_by_kraken_rejects_untouched(
        (count, round_no, tricks) in (test_gens::player_count(), 1..=6u8)
            .prop_flat_map(|(count, round_no)| {
                (
                    Just(count),
                    Just(round_no),
                    test_gens::trick_split(count, round_no),
                )
            }),
    ) {
        let bids = vec![0u8; count];
        let mut session = session_with(&bids, &tricks, round_no);
        // A complete split plus the phantom trick overshoots by one.
        toggle_kraken(&mut session).unwrap();

        let players_before = session.players.clone();
        let outcome = validate_and_advance(&mut session).unwrap();

        let expected = session.cards_this_round();
        prop_assert_eq!(
            outcome,
            AdvanceOutcome::Rejected {
                expected,
                reported: expected,
                adjusted: expected + 1,
            }
        );
        prop_assert_eq!(&session.players, &players_before);
    }

    #[test]
    fn prop_preview_matches_committed_totals(
        (count, round_no, bids, tricks) in (test_gens::player_count(), 1..=6u8)
            .prop_flat_map(|(count, round_no)| {
                (
                    Just(count),
                    Just(round_no),
                    test_gens::bids(count, round_no),
                    test_gens::trick_split(count, round_no),
                )
            }),
    ) {
        let mut session = session_with(&bids, &tricks, round_no);

        let previews: Vec<i32> = (0..count)
            .map(|idx| preview_points(&session, idx).unwrap())
            .collect();

        validate_and_advance(&mut session).unwrap();
        for (idx, player) in session.players.iter().enumerate() {
            prop_assert_eq!(player.cumulative_points, previews[idx]);
        }
    }
}
