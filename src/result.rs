//! Game outcome.

use crate::player::Player;

/// Who won a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A single player has the top score.
    Winner(Player),
    /// Several players share the top score, in ranking order.
    Tie(Vec<Player>),
    /// The game had no players.
    NoPlayers,
}

impl Outcome {
    /// Builds the outcome from players ranked by score, highest first.
    ///
    /// Every player whose score equals the leader's shares the win.
    #[must_use]
    pub fn from_rankings(rankings: Vec<Player>) -> Self {
        let Some(top) = rankings.first().map(Player::score) else {
            return Self::NoPlayers;
        };

        let mut winners: Vec<Player> = rankings
            .into_iter()
            .take_while(|p| p.score() == top)
            .collect();

        if winners.len() == 1 {
            Self::Winner(winners.remove(0))
        } else {
            Self::Tie(winners)
        }
    }

    /// Returns the winning players.
    #[must_use]
    pub fn winners(&self) -> &[Player] {
        match self {
            Self::Winner(player) => std::slice::from_ref(player),
            Self::Tie(players) => players,
            Self::NoPlayers => &[],
        }
    }

    /// Returns the winning score, if any player took part.
    #[must_use]
    pub fn top_score(&self) -> Option<i64> {
        self.winners().first().map(Player::score)
    }
}
