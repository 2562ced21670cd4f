//! Deck building and manipulation.

use std::fmt;

use log::debug;

use crate::card::Card;
use crate::error::DeckError;
use crate::rng::RandomSource;

mod extended;

/// Default suits ranking, low to high.
pub const DEFAULT_SUITS_RANKING: [&str; 4] = ["Spades", "Diamonds", "Hearts", "Clubs"];

/// Default values ranking, low to high.
pub const DEFAULT_VALUES_RANKING: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King", "Ace",
];

/// Suit rank given to the lowest suit by default.
pub const SUIT_RANK_START: i32 = 1;

/// Card rank given to the lowest value by default.
pub const VALUE_RANK_START: i32 = 2;

/// The ranking tables of a deck, each ordered low to high.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rankings {
    suits: Vec<String>,
    values: Vec<String>,
}

impl Rankings {
    /// Creates rankings from suit and value labels.
    #[must_use]
    pub fn new<S: AsRef<str>, V: AsRef<str>>(suits: &[S], values: &[V]) -> Self {
        Self {
            suits: to_labels(suits),
            values: to_labels(values),
        }
    }

    /// Returns the suit labels, low to high.
    #[must_use]
    pub fn suits(&self) -> &[String] {
        &self.suits
    }

    /// Returns the value labels, low to high.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Default for Rankings {
    fn default() -> Self {
        Self::new(&DEFAULT_SUITS_RANKING, &DEFAULT_VALUES_RANKING)
    }
}

/// Consecutive ranks starting at `start`, wrapping past `i32::MAX`.
fn ranks_from(start: i32) -> impl Iterator<Item = i32> {
    std::iter::successors(Some(start), |rank| Some(rank.wrapping_add(1)))
}

fn to_labels<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    labels.iter().map(|l| l.as_ref().to_owned()).collect()
}

/// Sort key used by [`DeckManager::sort`].
pub type SortKey = Box<dyn Fn(&Card, &Rankings) -> i64>;

/// Default sort key: `suit_rank * number_of_values + card_rank`.
#[must_use]
pub fn default_sort_key(card: &Card, rankings: &Rankings) -> i64 {
    let values = i64::try_from(rankings.values().len()).unwrap_or(i64::MAX);
    i64::from(card.suit_rank())
        .saturating_mul(values)
        .saturating_add(i64::from(card.card_rank()))
}

/// Owns a deck of cards and the rankings it was built from.
///
/// Cards are stored with the next card to draw at the end of the internal
/// vector. Every non mutating view returns the cards in natural order, that is
/// ascending suit rank and then ascending card rank.
///
/// # Example
///
/// ```
/// use cardgame::{Card, DeckManager};
///
/// let mut deck = DeckManager::new();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.draw_card().unwrap(), Card::new("Spades", "2", 1, 2));
/// ```
pub struct DeckManager {
    cards: Vec<Card>,
    rankings: Rankings,
    sort_key: SortKey,
    rng: RandomSource,
}

impl DeckManager {
    /// Creates a standard 52-card deck.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rankings(Rankings::default())
    }

    fn with_rankings(rankings: Rankings) -> Self {
        let mut cards = Self::build(
            rankings.suits(),
            rankings.values(),
            SUIT_RANK_START,
            VALUE_RANK_START,
        );
        cards.reverse();
        Self::from_parts(cards, rankings)
    }

    /// `cards` is in internal order, the next card to draw last.
    fn from_parts(cards: Vec<Card>, rankings: Rankings) -> Self {
        Self {
            cards,
            rankings,
            sort_key: Box::new(default_sort_key),
            rng: RandomSource::default(),
        }
    }

    /// Builds one card for each suit and value pair, in natural order.
    ///
    /// The first suit gets `suit_rank_start` and each following suit one more,
    /// so the last suit is the strongest. Values are ranked the same way
    /// starting at `value_rank_start`. Ranks are not validated and wrap past
    /// `i32::MAX`. An empty list yields an empty deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::DeckManager;
    ///
    /// let cards = DeckManager::build(&["Sith", "Jedi"], &["Padawan", "Master"], 1, 2);
    /// assert_eq!(cards.len(), 4);
    /// assert_eq!(cards[3].suit(), "Jedi");
    /// assert_eq!((cards[3].suit_rank(), cards[3].card_rank()), (2, 3));
    /// ```
    #[must_use]
    pub fn build<S: AsRef<str>, V: AsRef<str>>(
        suits: &[S],
        values: &[V],
        suit_rank_start: i32,
        value_rank_start: i32,
    ) -> Vec<Card> {
        let mut cards = Vec::with_capacity(suits.len() * values.len());

        for (suit, suit_rank) in suits.iter().zip(ranks_from(suit_rank_start)) {
            for (value, card_rank) in values.iter().zip(ranks_from(value_rank_start)) {
                cards.push(Card::new(
                    suit.as_ref(),
                    value.as_ref(),
                    suit_rank,
                    card_rank,
                ));
            }
        }

        cards
    }

    /// Sets the random source used by [`shuffle`](Self::shuffle).
    #[must_use]
    pub fn with_random_source(mut self, rng: RandomSource) -> Self {
        self.rng = rng;
        self
    }

    /// Replaces the sort key used by [`sort`](Self::sort).
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::DeckManager;
    ///
    /// let mut deck = DeckManager::new();
    /// // Rank by value first, suits break ties.
    /// deck.set_sort_key(|card, rankings| {
    ///     let suits = rankings.suits().len() as i64;
    ///     i64::from(card.card_rank()) * suits + i64::from(card.suit_rank())
    /// });
    /// let sorted = deck.sort();
    /// assert_eq!(sorted[0].to_string(), "2 of Spades");
    /// assert_eq!(sorted[1].to_string(), "2 of Diamonds");
    /// ```
    pub fn set_sort_key(&mut self, key: impl Fn(&Card, &Rankings) -> i64 + 'static) {
        self.sort_key = Box::new(key);
    }

    /// Returns a copy of the remaining cards in natural order.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        self.cards.iter().rev().cloned().collect()
    }

    /// Returns the deck rankings.
    #[must_use]
    pub const fn rankings(&self) -> &Rankings {
        &self.rankings
    }

    /// Returns the suit labels, low to high.
    #[must_use]
    pub fn suits_ranking(&self) -> &[String] {
        self.rankings.suits()
    }

    /// Returns the value labels, low to high.
    #[must_use]
    pub fn values_ranking(&self) -> &[String] {
        self.rankings.values()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffles the remaining cards and returns them in natural order.
    pub fn shuffle(&mut self) -> Vec<Card> {
        self.rng.shuffle(&mut self.cards);
        debug!("Shuffled deck with {} cards", self.cards.len());
        self.deck()
    }

    /// Sorts the remaining cards ascending by the sort key.
    ///
    /// The sort is stable and leaves the highest card to be drawn next.
    /// Returns the cards in their new internal order, lowest first, which for
    /// the default key is the natural order.
    pub fn sort(&mut self) -> Vec<Card> {
        let key = &self.sort_key;
        let rankings = &self.rankings;
        self.cards.sort_by_cached_key(|card| key(card, rankings));
        debug!("Sorted deck with {} cards", self.cards.len());
        self.cards.clone()
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards are left, the deck is left
    /// unchanged.
    pub fn draw_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::EmptyDeck)
    }
}

impl Default for DeckManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeckManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckManager")
            .field("cards", &self.deck())
            .field("rankings", &self.rankings)
            .field("rng", &self.rng)
            .finish_non_exhaustive()
    }
}
