//! Winner determination and the final game result.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, MoveRecord, Player, RuleVariant};

/// Winner of a finished game.
///
/// Decided from the player to move *after* the last move was committed:
/// - Standard: the player not to move wins
/// - Misère: the player to move wins
///
/// Returns `None` while the game is still in progress.
#[must_use]
pub fn determine_winner(state: &GameState) -> Option<Player> {
    if !state.is_terminal() {
        return None;
    }

    let to_move = state.active_player;
    Some(match state.variant() {
        RuleVariant::Standard => to_move.opponent(),
        RuleVariant::Misere => to_move,
    })
}

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The winning player.
    pub winner: Player,

    /// `GameState::score()` at termination, independent of the winner.
    pub final_score: i64,

    /// Rule variant the game was played under.
    pub variant: RuleVariant,

    /// Every committed move, in order.
    pub history: Vec<MoveRecord>,
}

impl GameResult {
    /// Build the result for a terminal state.
    ///
    /// Returns `None` if the game is not over.
    #[must_use]
    pub fn from_terminal(state: &GameState, history: Vec<MoveRecord>) -> Option<Self> {
        let winner = determine_winner(state)?;
        Some(Self {
            winner,
            final_score: state.score(),
            variant: state.variant(),
            history,
        })
    }

    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.history.len()
    }
}
