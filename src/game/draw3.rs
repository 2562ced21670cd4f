//! The Draw 3 game.
//!
//! Each player draws one card per turn for three rounds. A card is worth its
//! suit rank times its card rank and the highest total wins.

use log::debug;

use crate::card::Card;
use crate::deck::DeckManager;
use crate::error::GameError;

use super::{CardGame, GamePhase, GameRules, Table};

/// Draw 3 rules: 2 to 8 players, 3 rounds, one draw per turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draw3;

impl Draw3 {
    /// Minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players.
    pub const MAX_PLAYERS: usize = 8;
    /// Number of rounds.
    pub const NUM_ROUNDS: usize = 3;
}

/// A Draw 3 game.
pub type Draw3Game = CardGame<Draw3>;

impl GameRules for Draw3 {
    fn min_players(&self) -> usize {
        Self::MIN_PLAYERS
    }

    fn max_players(&self) -> usize {
        Self::MAX_PLAYERS
    }

    fn num_rounds(&self) -> usize {
        Self::NUM_ROUNDS
    }

    /// Uses a standard 52-card deck when none is given. A given deck is not
    /// shuffled here.
    fn setup(
        &mut self,
        table: &mut Table,
        deck: Option<DeckManager>,
        player_names: &[&str],
    ) -> Result<(), GameError> {
        table.set_deck_manager(deck.unwrap_or_default());

        table.remove_all_players();
        for name in player_names {
            table.add_player(name, self.max_players())?;
        }

        Ok(())
    }

    fn start(&mut self, table: &mut Table) -> Result<(), GameError> {
        let min = self.min_players();
        if table.players().len() < min {
            return Err(GameError::NeedMorePlayers { min });
        }

        if table.deck_manager().is_none() {
            return Err(GameError::DeckNotInitialized);
        }

        table.reset();
        table.arrange_turn_order();

        if table.options().auto_shuffle {
            if let Some(deck) = table.deck_manager_mut() {
                deck.shuffle();
            }
        }

        table.set_phase(GamePhase::InProgress);
        debug!("Draw 3 started, {} rounds", self.num_rounds());
        Ok(())
    }

    fn play_turn(&mut self, table: &mut Table, player: usize) -> Result<(), GameError> {
        table.draw_for(player)?;
        Ok(())
    }

    fn score(&self, hand: &[Card]) -> i64 {
        hand.iter().fold(0_i64, |total, card| {
            total.saturating_add(i64::from(card.suit_rank()) * i64::from(card.card_rank()))
        })
    }
}
