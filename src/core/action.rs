//! Move representation.
//!
//! A move removes some red and some blue marbles in a single ply. Moves are
//! plain values; legality depends on the state they are applied to and is
//! checked by `GameState::is_legal`.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A single ply: the number of red and blue marbles taken.
///
/// ## Example
///
/// ```
/// use red_blue_nim::core::Move;
///
/// let mv = Move::new(2, 0);
/// assert!(!mv.is_empty());
/// assert!(Move::new(0, 0).is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Red marbles taken.
    pub red: u32,

    /// Blue marbles taken.
    pub blue: u32,
}

impl Move {
    /// Create a move taking `red` red and `blue` blue marbles.
    #[must_use]
    pub const fn new(red: u32, blue: u32) -> Self {
        Self { red, blue }
    }

    /// True if the move takes nothing (never legal).
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.red == 0 && self.blue == 0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} red, {} blue)", self.red, self.blue)
    }
}

/// A committed move with the position it produced.
///
/// Used for the game transcript returned with the final result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, starting at 1.
    pub ply: u32,

    /// The player who moved.
    pub player: Player,

    /// The move taken.
    pub mv: Move,

    /// Red marbles left after the move.
    pub red_after: u32,

    /// Blue marbles left after the move.
    pub blue_after: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, player: Player, mv: Move, red_after: u32, blue_after: u32) -> Self {
        Self {
            ply,
            player,
            mv,
            red_after,
            blue_after,
        }
    }
}
