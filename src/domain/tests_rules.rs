//! Comparison rule tests: when a candidate play beats the table.

use super::cards::Card;
use super::rules::beats;
use crate::errors::GameError;

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

#[test]
fn higher_single_beats_lower() {
    // Ids 8 vs 4: point 2 beats point 1 at equal suit.
    let five = vec![Card::from_id(8).unwrap()];
    let four = vec![Card::from_id(4).unwrap()];
    assert!(beats(&five, Some(&four), false).is_ok());
    assert_eq!(
        beats(&four, Some(&five), false),
        Err(GameError::DoesNotBeat)
    );
}

#[test]
fn suit_breaks_ties_within_a_point() {
    let spade = cards(&["9S"]);
    let club = cards(&["9C"]);
    assert!(beats(&spade, Some(&club), false).is_ok());
    assert_eq!(
        beats(&club, Some(&spade), false),
        Err(GameError::DoesNotBeat)
    );
}

#[test]
fn invalid_shape_is_rejected_before_anything_else() {
    let junk = cards(&["3C", "7D"]);
    assert_eq!(
        beats(&junk, None, false),
        Err(GameError::InvalidHandShape)
    );
    // Even on the first turn the shape check comes first.
    assert_eq!(
        beats(&junk, None, true),
        Err(GameError::InvalidHandShape)
    );
}

#[test]
fn first_turn_must_include_the_opening_card() {
    let not_opening = vec![Card::from_id(1).unwrap()];
    assert_eq!(
        beats(&not_opening, None, true),
        Err(GameError::MustLeadOpeningCard)
    );

    assert!(beats(&[Card::OPENING], None, true).is_ok());
    // Larger shapes qualify as long as the opening card is inside.
    let pair = cards(&["3C", "3D"]);
    assert!(beats(&pair, None, true).is_ok());
}

#[test]
fn open_trick_accepts_any_legal_shape() {
    let pair = cards(&["KC", "KD"]);
    assert!(beats(&pair, None, false).is_ok());
    assert!(beats(&pair, Some(&[]), false).is_ok());
}

#[test]
fn size_mismatch_is_rejected() {
    let single = cards(&["2S"]);
    let pair = cards(&["4C", "4D"]);
    assert_eq!(
        beats(&single, Some(&pair), false),
        Err(GameError::SizeMismatch)
    );
    assert_eq!(
        beats(&pair, Some(&single), false),
        Err(GameError::SizeMismatch)
    );
}

#[test]
fn same_type_compares_by_power() {
    let low_flush = cards(&["3C", "5C", "7C", "9C", "JC"]);
    let high_flush = cards(&["3D", "5D", "7D", "9D", "QD"]);
    assert!(beats(&high_flush, Some(&low_flush), false).is_ok());
    assert_eq!(
        beats(&low_flush, Some(&high_flush), false),
        Err(GameError::DoesNotBeat)
    );
}

#[test]
fn five_card_categories_outrank_each_other() {
    let straight = cards(&["4C", "5D", "6H", "7S", "8C"]);
    let flush = cards(&["3C", "5C", "7C", "9C", "JC"]);
    let full_house = cards(&["4C", "4D", "4H", "KC", "KD"]);
    let four_kind = cards(&["9C", "9D", "9H", "9S", "3D"]);
    let straight_flush = cards(&["4S", "5S", "6S", "7S", "8S"]);

    assert!(beats(&flush, Some(&straight), false).is_ok());
    assert!(beats(&full_house, Some(&flush), false).is_ok());
    assert!(beats(&four_kind, Some(&full_house), false).is_ok());
    assert!(beats(&straight_flush, Some(&four_kind), false).is_ok());

    // A weaker category never beats a stronger one, whatever its power.
    assert_eq!(
        beats(&straight, Some(&flush), false),
        Err(GameError::DoesNotBeat)
    );
    assert_eq!(
        beats(&full_house, Some(&four_kind), false),
        Err(GameError::DoesNotBeat)
    );
}

#[test]
fn accepted_info_describes_the_candidate() {
    let full_house = cards(&["4C", "4D", "4H", "KC", "KD"]);
    let info = beats(&full_house, None, false).unwrap();
    assert_eq!(info.size, 5);
    assert_eq!(info.power.to_string(), "4H");
}
