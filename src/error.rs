//! Error types for deck, player and game operations.

use thiserror::Error;

/// Errors that can occur on a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Invalid arguments to build a deck.
    #[error("invalid deck: {0}")]
    InvalidDeck(&'static str),
}

/// Errors that can occur when creating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The player name is empty or blank.
    #[error("invalid player name")]
    InvalidName,
}

/// Errors that can occur while setting up or playing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The player name is empty or blank.
    #[error("invalid player name")]
    InvalidPlayerName,
    /// The roster is already full.
    #[error("too many players, max players is {max}")]
    MaxPlayersHit {
        /// Maximum number of players for this game.
        max: usize,
    },
    /// Not enough players to start the game.
    #[error("not enough players, need a minimum of {min}")]
    NeedMorePlayers {
        /// Minimum number of players for this game.
        min: usize,
    },
    /// No deck manager has been set up yet.
    #[error("deck not initialized")]
    DeckNotInitialized,
    /// A deck operation failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
