//! Custom deck construction and non mutating lookups.

use crate::card::Card;
use crate::error::DeckError;

use super::{DeckManager, Rankings};

fn ranking_labels(labels: &[&str], what: &'static str) -> Result<Vec<String>, DeckError> {
    if labels.is_empty() {
        return Err(DeckError::InvalidDeck(what));
    }

    Ok(labels.iter().map(|&l| l.to_owned()).collect())
}

impl DeckManager {
    /// Creates a deck from custom suits and values rankings, low to high.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDeck`] if either ranking is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::DeckManager;
    ///
    /// let deck = DeckManager::from_rankings(
    ///     &["Sith", "Jedi"],
    ///     &["Youngling", "Padawan", "Knight", "Guardian", "Master"],
    /// )
    /// .unwrap();
    /// assert_eq!(deck.len(), 10);
    /// assert_eq!(deck.peek_card(1).unwrap().to_string(), "Youngling of Sith");
    /// ```
    pub fn from_rankings(suits: &[&str], values: &[&str]) -> Result<Self, DeckError> {
        let suits = ranking_labels(suits, "suits ranking is empty")?;
        let values = ranking_labels(values, "values ranking is empty")?;

        Ok(Self::with_rankings(Rankings { suits, values }))
    }

    /// Creates a manager holding the given cards.
    ///
    /// The cards are drawn from the back: the last card of `initial_deck` is
    /// the first one drawn and the first card of [`deck`](Self::deck). Rankings
    /// that are not given keep the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InvalidDeck`] if a given ranking is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::{Card, DeckManager};
    ///
    /// let cards = vec![
    ///     Card::new("Hearts", "10", 1, 2),
    ///     Card::new("Hearts", "Jack", 1, 3),
    /// ];
    /// let mut deck = DeckManager::from_existing_deck(cards, None, None).unwrap();
    /// assert_eq!(deck.draw_card().unwrap().value(), "Jack");
    /// ```
    pub fn from_existing_deck(
        initial_deck: Vec<Card>,
        suits: Option<&[&str]>,
        values: Option<&[&str]>,
    ) -> Result<Self, DeckError> {
        let mut rankings = Rankings::default();
        if let Some(suits) = suits {
            rankings.suits = ranking_labels(suits, "suits ranking is empty")?;
        }
        if let Some(values) = values {
            rankings.values = ranking_labels(values, "values ranking is empty")?;
        }

        Ok(Self::from_parts(initial_deck, rankings))
    }

    /// Removes all remaining cards.
    pub fn empty_deck(&mut self) {
        self.cards.clear();
    }

    /// Returns the card at a 1-based position in natural order, without
    /// removing it.
    ///
    /// Position 1 is the card [`draw_card`](Self::draw_card) returns next.
    /// Returns `None` for position 0 or a position past the end of the deck.
    #[must_use]
    pub fn peek_card(&self, position: usize) -> Option<&Card> {
        if position == 0 {
            return None;
        }

        self.cards
            .len()
            .checked_sub(position)
            .and_then(|index| self.cards.get(index))
    }
}
