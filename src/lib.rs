//! Ranked decks, players and a turn/round engine for simple card games.
//!
//! The crate provides:
//!
//! - [`Card`], a card with display labels and the ranks used to compare it;
//! - [`DeckManager`], which builds a deck from suits and values rankings and
//!   shuffles, sorts, draws and peeks cards;
//! - [`Player`], a name, a hand and a score;
//! - [`CardGame`], a driver for any [`GameRules`] implementation that manages
//!   the roster, the turn order and the round counters;
//! - [`Draw3`], a game where each player draws a card per round for three
//!   rounds and the highest weighted sum wins.
//!
//! # Example
//!
//! ```
//! use cardgame::{Draw3Game, Outcome};
//!
//! let mut game = Draw3Game::default();
//! game.set_random_turn_order(false);
//! game.set_auto_shuffle(false);
//! game.setup_game(None, &["Buck", "Cherry"]).unwrap();
//! game.start_game().unwrap();
//!
//! while !game.is_game_over() {
//!     game.next_turn().unwrap();
//! }
//!
//! // Cherry drew the 2, 4 and 6 of Spades, Buck the 3, 5 and 7.
//! let Outcome::Winner(winner) = game.outcome() else { unreachable!() };
//! assert_eq!(winner.name(), "Buck");
//! assert_eq!(winner.score(), 15);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod result;
pub mod rng;

// Re-export main types
pub use card::Card;
pub use deck::{
    DEFAULT_SUITS_RANKING, DEFAULT_VALUES_RANKING, DeckManager, Rankings, SUIT_RANK_START,
    SortKey, VALUE_RANK_START,
};
pub use error::{DeckError, GameError, PlayerError};
pub use game::{CardGame, Draw3, Draw3Game, GamePhase, GameRules, Table, TurnPosition};
pub use options::GameOptions;
pub use player::Player;
pub use result::Outcome;
pub use rng::RandomSource;
