//! Game rules beyond the state itself.
//!
//! - `moves`: which candidate moves the computer considers, per variant
//! - `outcome`: who wins once a pile is empty
//!
//! Legality and scoring live on `GameState`; this module only decides
//! what the computer tries and how a finished game is read.

pub mod moves;
pub mod outcome;

pub use moves::{MoveGenerator, MoveList, VariantMoves, MISERE_CANDIDATES, STANDARD_CANDIDATES};
pub use outcome::{determine_winner, GameResult};
