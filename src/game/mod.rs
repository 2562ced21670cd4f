//! Game engine and state management.

use log::{debug, info};

use crate::card::Card;
use crate::deck::DeckManager;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::Outcome;
use crate::rng::RandomSource;

mod draw3;
pub mod rules;
pub mod state;

pub use draw3::{Draw3, Draw3Game};
pub use rules::GameRules;
pub use state::{GamePhase, TurnPosition};

type RoundCallback = Box<dyn FnMut(usize)>;

/// The state shared by every rule set: deck, roster, turn order and counters.
///
/// Rule sets receive the table in each [`GameRules`] method and use it to
/// manage players and draw cards.
pub struct Table {
    /// The deck manager, once set up.
    deck: Option<DeckManager>,
    /// Players in the order they joined.
    players: Vec<Player>,
    /// Indices into `players` in play order.
    turn_order: Vec<usize>,
    /// Current turn position.
    position: TurnPosition,
    /// Number of turn advances since the game started.
    turn_count: usize,
    /// Current game phase.
    phase: GamePhase,
    /// Game options.
    options: GameOptions,
    /// Random source for turn order and default decks.
    rng: RandomSource,
    /// Called with the 1-based round number when a round begins.
    round_start: Option<RoundCallback>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(options: GameOptions) -> Self {
        let rng = options
            .seed
            .map_or_else(RandomSource::default, RandomSource::seeded);

        Self {
            deck: None,
            players: Vec::new(),
            turn_order: Vec::new(),
            position: TurnPosition::default(),
            turn_count: 0,
            phase: GamePhase::Unconfigured,
            options,
            rng,
            round_start: None,
        }
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the game options for modification.
    pub const fn options_mut(&mut self) -> &mut GameOptions {
        &mut self.options
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Sets the game phase.
    pub const fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    /// Returns the deck manager.
    #[must_use]
    pub const fn deck_manager(&self) -> Option<&DeckManager> {
        self.deck.as_ref()
    }

    /// Returns the deck manager for modification.
    pub const fn deck_manager_mut(&mut self) -> Option<&mut DeckManager> {
        self.deck.as_mut()
    }

    /// Sets the deck manager.
    ///
    /// With a seed in the options the deck shuffles from a source forked from
    /// this table, replacing its own.
    pub fn set_deck_manager(&mut self, deck: DeckManager) {
        let deck = if self.options.seed.is_some() {
            deck.with_random_source(self.rng.fork())
        } else {
            deck
        };

        debug!("Deck set up with {} cards", deck.len());
        self.deck = Some(deck);
        self.phase = GamePhase::Configured;
    }

    /// Returns a copy of the deck in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckNotInitialized`] if no deck manager is set up.
    pub fn deck(&self) -> Result<Vec<Card>, GameError> {
        self.deck
            .as_ref()
            .map(DeckManager::deck)
            .ok_or(GameError::DeckNotInitialized)
    }

    /// Returns the players in the order they joined.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the players for modification.
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    /// Adds a player at the end of the roster and of the turn order.
    ///
    /// Returns the number of players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerName`] for an empty or blank name,
    /// or [`GameError::MaxPlayersHit`] if the roster already has
    /// `max_players` players.
    pub fn add_player(&mut self, name: &str, max_players: usize) -> Result<usize, GameError> {
        let player = Player::new(name).map_err(|_| GameError::InvalidPlayerName)?;

        if self.players.len() >= max_players {
            return Err(GameError::MaxPlayersHit { max: max_players });
        }

        self.turn_order.push(self.players.len());
        self.players.push(player);
        debug!("Player {name} joined, {} players", self.players.len());

        Ok(self.players.len())
    }

    /// Removes all players.
    pub fn remove_all_players(&mut self) {
        self.players.clear();
        self.turn_order.clear();
        self.position = TurnPosition::default();
        self.turn_count = 0;
        self.phase = if self.deck.is_some() {
            GamePhase::Configured
        } else {
            GamePhase::Unconfigured
        };
    }

    /// Returns the turn order as indices into [`players`](Self::players).
    #[must_use]
    pub fn turn_order(&self) -> &[usize] {
        &self.turn_order
    }

    /// Resets the turn order to the order players joined, then shuffles it if
    /// random turn order is enabled.
    pub fn arrange_turn_order(&mut self) {
        for (slot, index) in self.turn_order.iter_mut().enumerate() {
            *index = slot;
        }

        if self.options.random_turn_order {
            self.rng.shuffle(&mut self.turn_order);
            debug!("Shuffled turn order: {:?}", self.turn_order);
        }
    }

    /// Resets counters, scores and hands for a new game.
    pub fn reset(&mut self) {
        self.position = TurnPosition::default();
        self.turn_count = 0;
        for player in &mut self.players {
            player.set_score(0);
            player.set_hand(Vec::new());
        }
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn position(&self) -> TurnPosition {
        self.position
    }

    /// Returns the 1-based turn number within the turn order.
    #[must_use]
    pub const fn turn_num(&self) -> usize {
        self.position.turn_index + 1
    }

    /// Returns the 1-based round number.
    #[must_use]
    pub const fn round_num(&self) -> usize {
        self.position.round_index + 1
    }

    /// Returns the roster index of the player whose turn it is.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.turn_order.get(self.position.turn_index).copied()
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_index().and_then(|index| self.players.get(index))
    }

    /// Moves the turn to the next slot in the turn order.
    ///
    /// The first advance of a game starts round one. After that a new round
    /// starts each time the turn lands on the second slot of the turn order
    /// (the first slot when there is a single player), and the round counter
    /// is incremented. Returns whether a new round started.
    pub fn advance_turn(&mut self) -> bool {
        let count = self.players.len();
        if count == 0 {
            return false;
        }

        let first = self.turn_count == 0;
        self.position.turn_index = (self.position.turn_index + 1) % count;
        self.turn_count += 1;

        if first {
            return true;
        }

        if self.position.turn_index == 1 % count {
            self.position.round_index += 1;
            return true;
        }

        false
    }

    /// Runs the round-start callback for the current round.
    pub fn begin_round(&mut self) {
        let round = self.round_num();
        debug!("Round {round} begins");
        if let Some(callback) = self.round_start.as_mut() {
            callback(round);
        }
    }

    /// Draws a card for the player at `player` in the roster and returns the
    /// player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckNotInitialized`] if no deck manager is set up,
    /// or [`GameError::Deck`] if the deck is empty.
    ///
    /// # Panics
    ///
    /// Panics if `player` is not a valid roster index.
    pub fn draw_for(&mut self, player: usize) -> Result<&Player, GameError> {
        let deck = self.deck.as_mut().ok_or(GameError::DeckNotInitialized)?;
        let player = &mut self.players[player];
        player.draw_card(deck)?;

        if let Some(card) = player.last_card() {
            debug!("{} drew {card}", player.name());
        }

        Ok(player)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

/// A card game driven by a rule set.
///
/// The game owns the deck manager, the roster and the turn order, and uses
/// `R` for everything a rule set decides. See [`Draw3Game`] for a complete
/// game.
///
/// # Example
///
/// ```
/// use cardgame::{Draw3Game, Outcome};
///
/// let mut game = Draw3Game::default();
/// game.setup_game(None, &["Buck", "Cherry"]).unwrap();
/// game.start_game().unwrap();
/// while game.next_turn().unwrap().is_some() {}
///
/// match game.outcome() {
///     Outcome::Winner(player) => println!("{} won", player.name()),
///     Outcome::Tie(players) => println!("{}-way tie", players.len()),
///     Outcome::NoPlayers => unreachable!(),
/// }
/// ```
pub struct CardGame<R> {
    rules: R,
    table: Table,
}

impl<R: GameRules> CardGame<R> {
    /// Creates a game with default options.
    #[must_use]
    pub fn new(rules: R) -> Self {
        Self::with_options(rules, GameOptions::default())
    }

    /// Creates a game with the given options.
    #[must_use]
    pub fn with_options(rules: R, options: GameOptions) -> Self {
        Self {
            rules,
            table: Table::new(options),
        }
    }

    /// Returns the rule set.
    #[must_use]
    pub const fn rules(&self) -> &R {
        &self.rules
    }

    /// Returns the shared game state.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the minimum number of players.
    #[must_use]
    pub fn min_players(&self) -> usize {
        self.rules.min_players()
    }

    /// Returns the maximum number of players.
    #[must_use]
    pub fn max_players(&self) -> usize {
        self.rules.max_players()
    }

    /// Returns the number of rounds in a game.
    #[must_use]
    pub fn num_rounds(&self) -> usize {
        self.rules.num_rounds()
    }

    /// Returns whether the turn order is shuffled on start.
    #[must_use]
    pub const fn random_turn_order(&self) -> bool {
        self.table.options.random_turn_order
    }

    /// Sets whether the turn order is shuffled on start.
    pub const fn set_random_turn_order(&mut self, random: bool) {
        self.table.options.random_turn_order = random;
    }

    /// Returns whether the deck is shuffled on start.
    #[must_use]
    pub const fn auto_shuffle(&self) -> bool {
        self.table.options.auto_shuffle
    }

    /// Sets whether the deck is shuffled on start.
    pub const fn set_auto_shuffle(&mut self, shuffle: bool) {
        self.table.options.auto_shuffle = shuffle;
    }

    /// Sets a callback run with the 1-based round number when a round begins.
    ///
    /// # Example
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    ///
    /// use cardgame::Draw3Game;
    ///
    /// let rounds = Rc::new(RefCell::new(Vec::new()));
    /// let seen = Rc::clone(&rounds);
    ///
    /// let mut game = Draw3Game::default();
    /// game.on_round_start(move |round| seen.borrow_mut().push(round));
    /// game.setup_game(None, &["Buck", "Cherry"]).unwrap();
    /// game.start_game().unwrap();
    /// while game.next_turn().unwrap().is_some() {}
    ///
    /// assert_eq!(*rounds.borrow(), [1, 2, 3]);
    /// ```
    pub fn on_round_start(&mut self, callback: impl FnMut(usize) + 'static) {
        self.table.round_start = Some(Box::new(callback));
    }

    /// Returns the current game phase.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        self.table.phase
    }

    /// Returns a copy of the deck in natural order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DeckNotInitialized`] before the game is set up.
    pub fn deck(&self) -> Result<Vec<Card>, GameError> {
        self.table.deck()
    }

    /// Returns the 1-based turn number within the turn order.
    #[must_use]
    pub const fn turn_num(&self) -> usize {
        self.table.turn_num()
    }

    /// Returns the 1-based round number.
    #[must_use]
    pub const fn round_num(&self) -> usize {
        self.table.round_num()
    }

    /// Returns the player names in turn order.
    #[must_use]
    pub fn turn_order(&self) -> Vec<&str> {
        self.table
            .turn_order
            .iter()
            .map(|&index| self.table.players[index].name())
            .collect()
    }

    /// Returns the players in the order they joined.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.table.players()
    }

    /// Adds a player.
    ///
    /// Returns the number of players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPlayerName`] for an empty or blank name,
    /// or [`GameError::MaxPlayersHit`] if the roster is full. The roster is
    /// unchanged on error.
    pub fn add_player(&mut self, name: &str) -> Result<usize, GameError> {
        self.table.add_player(name, self.rules.max_players())
    }

    /// Removes all players.
    pub fn remove_all_players(&mut self) {
        self.table.remove_all_players();
    }

    /// Sets up the deck and the roster.
    ///
    /// Without a deck manager the rule set picks its default deck. The roster
    /// is cleared before `player_names` are added.
    ///
    /// # Errors
    ///
    /// Returns an error if a player cannot be added, for example
    /// [`GameError::MaxPlayersHit`].
    pub fn setup_game(
        &mut self,
        deck: Option<DeckManager>,
        player_names: &[&str],
    ) -> Result<(), GameError> {
        self.rules.setup(&mut self.table, deck, player_names)
    }

    /// Starts the game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NeedMorePlayers`] if there are not enough
    /// players, or another error from the rule set.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        self.rules.start(&mut self.table)?;
        info!(
            "Game started with {} players: {}",
            self.table.players.len(),
            self.turn_order().join(", ")
        );
        Ok(())
    }

    /// Returns whether all rounds have been played.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.rules.is_over(&self.table)
    }

    /// Returns the player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.table.current_player()
    }

    /// Plays the next turn.
    ///
    /// Returns the player who played, or `None` once the game is over.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn cannot be played, for example
    /// [`GameError::Deck`] when the deck runs out of cards.
    pub fn next_turn(&mut self) -> Result<Option<&Player>, GameError> {
        let player = self.rules.next_turn(&mut self.table)?;
        Ok(player.map(|index| &self.table.players[index]))
    }

    /// Computes the points for a hand.
    #[must_use]
    pub fn calc_points(&self, hand: &[Card]) -> i64 {
        self.rules.score(hand)
    }

    /// Scores every player and returns the players ranked by score, highest
    /// first. Ties keep the order players joined.
    pub fn player_rankings(&mut self) -> Vec<Player> {
        self.rules.rank(&mut self.table)
    }

    /// Ranks the players and returns the winner or the tied leaders.
    pub fn outcome(&mut self) -> Outcome {
        Outcome::from_rankings(self.player_rankings())
    }
}

impl<R: GameRules + Default> Default for CardGame<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
