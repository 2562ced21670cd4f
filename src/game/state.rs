//! Game state types.

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No deck manager has been set up.
    #[default]
    Unconfigured,
    /// Deck and roster are set up, the game has not started.
    Configured,
    /// Turns are being played.
    InProgress,
    /// All rounds have been played.
    Over,
}

/// Represents the current turn position.
///
/// Both indices are 0-based, the game reports them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnPosition {
    /// Index into the turn order.
    pub turn_index: usize,
    /// Index of the current round.
    pub round_index: usize,
}
