//! # red-blue-nim
//!
//! Red-Blue Nim between a human and a computer opponent that searches with
//! depth-limited minimax and alpha-beta pruning.
//!
//! ## Rules
//!
//! 1. **Piles**: a red and a blue pile, both non-empty at the start.
//!
//! 2. **Moves**: a ply removes any number of red and blue marbles, at least
//!    one in total, never more than a pile holds.
//!
//! 3. **End**: the game ends as soon as either pile is empty. The final
//!    score is `2 * red + 3 * blue`; the winner depends on the variant
//!    (standard or misère) and on who is to move at that point.
//!
//! ## Architecture
//!
//! - **Single owned state**: one `GameState` per game, mutated in place by
//!   the loop and, with strict apply/undo pairing, by the search.
//!
//! - **Fixed candidates**: the computer only considers a four-move list per
//!   variant; list order breaks ties.
//!
//! - **Collaborator seams**: input and output are traits (`MoveSource`,
//!   `GameObserver`); the console versions live next to them.
//!
//! ## Modules
//!
//! - `core`: players, moves, configuration, state, RNG
//! - `rules`: candidate move generation and winner determination
//! - `search`: minimax with alpha-beta pruning
//! - `game`: the turn loop and its collaborators
//! - `error`: crate error type

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod game;

// Re-export commonly used types
pub use crate::core::{DepthLimit, GameConfig, GameRng, GameState, Move, MoveRecord, Player, RuleVariant};

pub use crate::error::{Error, Result};

pub use crate::rules::{determine_winner, GameResult, MoveGenerator, VariantMoves};

pub use crate::search::{leaf_value, MinimaxSearch, SearchConfig, SearchStats};

pub use crate::game::{
    ConsoleInput, ConsoleOutput, GameLoop, GameObserver, MoveSource, Phase, RandomMoveSource,
};
