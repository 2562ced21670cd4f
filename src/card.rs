//! Card type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A playing card.
///
/// A card carries two display labels and two ranks. Only the ranks take part
/// in comparisons: two cards with the same suit rank and card rank are equal
/// even when their labels differ.
///
/// ```
/// use cardgame::Card;
///
/// let two = Card::new("Spades", "2", 1, 2);
/// let alias = Card::new("Swords", "Two", 1, 2);
/// assert_eq!(two, alias);
/// assert!(two < Card::new("Spades", "3", 1, 3));
/// ```
#[derive(Debug, Clone)]
pub struct Card {
    suit: String,
    value: String,
    suit_rank: i32,
    card_rank: i32,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: ranks are not validated, the deck builder assigns them.
    #[must_use]
    pub fn new(
        suit: impl Into<String>,
        value: impl Into<String>,
        suit_rank: i32,
        card_rank: i32,
    ) -> Self {
        Self {
            suit: suit.into(),
            value: value.into(),
            suit_rank,
            card_rank,
        }
    }

    /// Returns the suit label.
    #[must_use]
    pub fn suit(&self) -> &str {
        &self.suit
    }

    /// Returns the value label.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the suit rank, higher is stronger.
    #[must_use]
    pub const fn suit_rank(&self) -> i32 {
        self.suit_rank
    }

    /// Returns the card rank within its suit, higher is stronger.
    #[must_use]
    pub const fn card_rank(&self) -> i32 {
        self.card_rank
    }

    const fn ranks(&self) -> (i32, i32) {
        (self.suit_rank, self.card_rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.ranks() == other.ranks()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ranks().hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ranks().cmp(&other.ranks())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}
