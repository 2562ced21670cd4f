//! Card integration tests.

use std::collections::HashSet;

use cardgame::Card;

#[test]
fn card_accessors() {
    let card = Card::new("Suit", "Value", 1, 2);
    assert_eq!(card.suit(), "Suit");
    assert_eq!(card.value(), "Value");
    assert_eq!(card.suit_rank(), 1);
    assert_eq!(card.card_rank(), 2);
    assert_eq!(card.to_string(), "Value of Suit");
}

#[test]
fn equality_ignores_labels() {
    let card1 = Card::new("Suit1", "Value1", 1, 2);
    let card2 = Card::new("Suit2", "Value2", 2, 3);
    let card3 = Card::new("Other", "Labels", 1, 2);

    assert_eq!(card1, card3);
    assert_ne!(card1, card2);
    assert!(card2 > card1);

    let set: HashSet<Card> = [card1, card2, card3].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn ordering_by_suit_then_card_rank() {
    let low_suit_high_card = Card::new("Spades", "Ace", 1, 14);
    let high_suit_low_card = Card::new("Clubs", "2", 4, 2);
    assert!(low_suit_high_card < high_suit_low_card);

    let card = Card::new("Spades", "5", 1, 5);
    assert!(card < Card::new("Spades", "6", 1, 6));
    assert!(card > Card::new("Spades", "4", 1, 4));

    let mut cards = vec![
        high_suit_low_card.clone(),
        card.clone(),
        low_suit_high_card.clone(),
    ];
    cards.sort();
    assert_eq!(cards, [card, low_suit_high_card, high_suit_low_card.clone()]);
    assert_eq!(cards.iter().max(), Some(&high_suit_low_card));
}

#[test]
fn clone_is_equal_and_independent() {
    let card = Card::new("Suit1", "Value1", 1, 2);
    let copy = card.clone();
    assert_eq!(card, copy);
    assert_eq!(copy.suit(), "Suit1");
    assert_eq!(copy.value(), "Value1");
}
