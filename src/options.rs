//! Game configuration options.

/// Configuration options for a card game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardgame::GameOptions;
///
/// let options = GameOptions::default()
///     .with_random_turn_order(false)
///     .with_auto_shuffle(false)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether the turn order is shuffled when the game starts, otherwise
    /// players take turns in the order they joined.
    pub random_turn_order: bool,
    /// Whether the deck is shuffled when the game starts.
    pub auto_shuffle: bool,
    /// Seed for turn order and deck shuffles, `None` to use the process-wide
    /// generator. A seed also applies to a deck passed to `setup_game`.
    pub seed: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            random_turn_order: true,
            auto_shuffle: true,
            seed: None,
        }
    }
}

impl GameOptions {
    /// Sets whether the turn order is shuffled on start.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_random_turn_order(false);
    /// assert!(!options.random_turn_order);
    /// ```
    #[must_use]
    pub const fn with_random_turn_order(mut self, random: bool) -> Self {
        self.random_turn_order = random;
        self
    }

    /// Sets whether the deck is shuffled on start.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_shuffle(false);
    /// assert!(!options.auto_shuffle);
    /// ```
    #[must_use]
    pub const fn with_auto_shuffle(mut self, shuffle: bool) -> Self {
        self.auto_shuffle = shuffle;
        self
    }

    /// Sets the seed used for turn order and deck shuffles.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgame::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(42);
    /// assert_eq!(options.seed, Some(42));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
