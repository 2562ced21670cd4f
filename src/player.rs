//! Player representation.

use std::fmt;

use crate::card::Card;
use crate::deck::DeckManager;
use crate::error::{DeckError, PlayerError};

/// A player with a name, a hand of cards and a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player name, set once.
    name: String,
    /// Cards in draw order, the most recent last.
    hand: Vec<Card>,
    /// Current score.
    score: i64,
}

impl Player {
    /// Creates a player with an empty hand and a zero score.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::InvalidName`] if the name is empty or blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::InvalidName);
        }

        Ok(Self {
            name,
            hand: Vec::new(),
            score: 0,
        })
    }

    /// Returns the player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards in the hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Replaces the whole hand, for rules that swap or trade hands.
    pub fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }

    /// Returns the most recently drawn card.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.hand.last()
    }

    /// Returns the player score.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Sets the player score.
    pub const fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Draws a card from the deck and adds it to the hand.
    ///
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the deck has no cards left, the
    /// hand is left unchanged.
    pub fn draw_card(&mut self, deck: &mut DeckManager) -> Result<&Card, DeckError> {
        let card = deck.draw_card()?;
        self.hand.push(card);
        Ok(&self.hand[self.hand.len() - 1])
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} points)", self.name, self.score)
    }
}
