use crate::domain::scoring::round_points;

#[test]
fn correct_zero_bid_pays_full_round_value() {
    assert_eq!(round_points(1, 0, 0, 0), 10);
    assert_eq!(round_points(5, 0, 0, 0), 50);
    assert_eq!(round_points(10, 0, 0, 0), 100);
}

#[test]
fn missed_zero_bid_costs_full_round_value() {
    assert_eq!(round_points(5, 0, 1, 0), -50);
    assert_eq!(round_points(5, 0, 5, 0), -50);
    assert_eq!(round_points(10, 0, 3, 0), -100);
}

#[test]
fn zero_bid_ignores_bonus_either_way() {
    assert_eq!(round_points(7, 0, 0, 120), 70);
    assert_eq!(round_points(7, 0, 2, 120), -70);
}

#[test]
fn exact_bid_pays_twenty_per_trick_plus_bonus() {
    assert_eq!(round_points(5, 3, 3, 0), 60);
    assert_eq!(round_points(5, 3, 3, 30), 90);
    assert_eq!(round_points(10, 10, 10, 0), 200);
}

#[test]
fn missed_bid_costs_ten_per_trick_of_error() {
    assert_eq!(round_points(5, 3, 1, 0), -20);
    assert_eq!(round_points(5, 1, 3, 0), -20);
    assert_eq!(round_points(10, 2, 7, 0), -50);
}

#[test]
fn bonus_has_no_effect_off_target() {
    assert_eq!(round_points(5, 3, 1, 200), round_points(5, 3, 1, 0));
    assert_eq!(round_points(5, 2, 5, 40), -30);
}

#[test]
fn zero_card_round_is_well_defined() {
    assert_eq!(round_points(0, 0, 0, 0), 0);
    assert_eq!(round_points(0, 0, 0, 50), 0);
}

#[test]
fn round_three_exact_bids_pay_out() {
    // Round 3, bids {2, 1}, tricks {2, 1}: both exact.
    assert_eq!(round_points(3, 2, 2, 0), 40);
    assert_eq!(round_points(3, 1, 1, 0), 20);
}
