//! Rules trait for game implementations.
//!
//! A rule set decides how a game is set up and started, what a player does on
//! a turn, and how hands are scored. [`CardGame`](super::CardGame) drives the
//! rule set and keeps the shared state in a [`Table`].

use std::cmp::Reverse;

use log::{debug, info};

use crate::card::Card;
use crate::deck::DeckManager;
use crate::error::GameError;
use crate::player::Player;

use super::{GamePhase, Table};

/// Rules of a turn-based card game played over a fixed number of rounds.
///
/// ## Implementation Notes
///
/// - `setup` and `start` are required, a game cannot be played without them.
/// - `next_turn` advances the turn and calls `play_turn` for the player whose
///   turn it is. Override it to change how rounds are counted.
/// - `rank` scores every hand with `score` and sorts players by score.
pub trait GameRules {
    /// Minimum number of players needed to start.
    fn min_players(&self) -> usize;

    /// Maximum number of players allowed.
    fn max_players(&self) -> usize;

    /// Number of rounds in a game.
    fn num_rounds(&self) -> usize;

    /// Sets up the deck and the roster.
    ///
    /// Calling this again replaces the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if a player cannot be added.
    fn setup(
        &mut self,
        table: &mut Table,
        deck: Option<DeckManager>,
        player_names: &[&str],
    ) -> Result<(), GameError>;

    /// Starts a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot start, for example when there are
    /// not enough players.
    fn start(&mut self, table: &mut Table) -> Result<(), GameError>;

    /// Plays a turn for the player at `player` in the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn cannot be played.
    fn play_turn(&mut self, table: &mut Table, player: usize) -> Result<(), GameError>;

    /// Computes the points for a hand.
    fn score(&self, hand: &[Card]) -> i64;

    /// Returns whether all rounds have been played.
    fn is_over(&self, table: &Table) -> bool {
        table.round_num() > self.num_rounds()
    }

    /// Advances to the next turn and plays it.
    ///
    /// Returns the roster index of the player who played, or `None` once the
    /// game is over. The round-start callback runs before the first turn of
    /// each round.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn cannot be played.
    fn next_turn(&mut self, table: &mut Table) -> Result<Option<usize>, GameError> {
        if table.players().is_empty() || self.is_over(table) {
            return Ok(None);
        }

        if table.advance_turn() {
            if self.is_over(table) {
                table.set_phase(GamePhase::Over);
                info!("Game over after {} rounds", self.num_rounds());
                return Ok(None);
            }

            table.begin_round();
        }

        let Some(player) = table.current_index() else {
            return Ok(None);
        };

        self.play_turn(table, player)?;
        Ok(Some(player))
    }

    /// Scores every player and returns the players ranked by score, highest
    /// first.
    ///
    /// Players with the same score keep their roster order.
    fn rank(&self, table: &mut Table) -> Vec<Player> {
        for player in table.players_mut() {
            let score = self.score(player.hand());
            player.set_score(score);
        }

        let mut ranked = table.players().to_vec();
        ranked.sort_by_key(|p| Reverse(p.score()));
        if let Some(leader) = ranked.first() {
            debug!("Ranked {} players, leader is {leader}", ranked.len());
        }
        ranked
    }
}
