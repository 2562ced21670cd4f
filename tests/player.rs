//! Player integration tests.

use cardgame::{Card, DeckError, DeckManager, Player, PlayerError};

#[test]
fn new_player() {
    let player = Player::new("Buck").unwrap();
    assert_eq!(player.name(), "Buck");
    assert!(player.hand().is_empty());
    assert_eq!(player.score(), 0);
    assert_eq!(player.last_card(), None);
    assert_eq!(player.to_string(), "Buck (0 points)");
}

#[test]
fn blank_names_are_rejected() {
    assert_eq!(Player::new("").unwrap_err(), PlayerError::InvalidName);
    assert_eq!(Player::new("   ").unwrap_err(), PlayerError::InvalidName);
}

#[test]
fn score_can_be_set() {
    let mut player = Player::new("Cherry").unwrap();
    player.set_score(42);
    assert_eq!(player.score(), 42);
    player.set_score(-3);
    assert_eq!(player.score(), -3);
    assert_eq!(player.to_string(), "Cherry (-3 points)");
}

#[test]
fn draw_card_appends_to_hand() {
    let mut deck = DeckManager::new();
    let mut player = Player::new("Buck").unwrap();

    let card = player.draw_card(&mut deck).unwrap().clone();
    assert_eq!(card, Card::new("Spades", "2", 1, 2));
    player.draw_card(&mut deck).unwrap();

    assert_eq!(
        player.hand(),
        [Card::new("Spades", "2", 1, 2), Card::new("Spades", "3", 1, 3)]
    );
    assert_eq!(player.last_card(), Some(&Card::new("Spades", "3", 1, 3)));
    assert_eq!(deck.len(), 50);
}

#[test]
fn draw_from_empty_deck_leaves_hand_unchanged() {
    let mut deck = DeckManager::new();
    deck.empty_deck();
    let mut player = Player::new("Buck").unwrap();

    assert_eq!(player.draw_card(&mut deck).unwrap_err(), DeckError::EmptyDeck);
    assert!(player.hand().is_empty());
}

#[test]
fn set_hand_replaces_cards() {
    let mut deck = DeckManager::new();
    let mut player = Player::new("Buck").unwrap();
    player.draw_card(&mut deck).unwrap();

    let hand = vec![Card::new("Clubs", "Ace", 4, 14)];
    player.set_hand(hand.clone());
    assert_eq!(player.hand(), hand);

    player.set_hand(Vec::new());
    assert!(player.hand().is_empty());
}

#[test]
fn clones_are_independent() {
    let mut deck = DeckManager::new();
    let mut player = Player::new("Buck").unwrap();
    player.draw_card(&mut deck).unwrap();
    player.set_score(7);

    let mut copy = player.clone();
    assert_eq!(copy, player);

    copy.draw_card(&mut deck).unwrap();
    copy.set_score(1);
    assert_eq!(player.hand().len(), 1);
    assert_eq!(player.score(), 7);
    assert_eq!(copy.hand().len(), 2);
}
