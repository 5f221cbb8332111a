//! Move selection for the computer player.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning over the candidate moves
//! of a `MoveGenerator`:
//!
//! - **In-place**: the live `GameState` is mutated and restored with
//!   apply/undo; nothing is cloned per node
//! - **Deterministic**: candidates are tried in generator order and the
//!   first best move wins ties
//! - **Verifiable**: pruning can be switched off to compare against plain
//!   minimax; `SearchStats` records the work done
//!
//! ## Usage
//!
//! ```rust
//! use red_blue_nim::core::{GameConfig, GameState, Move};
//! use red_blue_nim::rules::VariantMoves;
//! use red_blue_nim::search::{MinimaxSearch, SearchConfig};
//!
//! let mut state = GameState::new(&GameConfig::new(1, 1)).unwrap();
//! let mut search = MinimaxSearch::new(VariantMoves, SearchConfig::for_state(&state));
//!
//! let mv = search.select_best_move(&mut state).unwrap();
//! assert_eq!(mv, Some(Move::new(1, 0)));
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{leaf_value, MinimaxSearch};
pub use stats::SearchStats;
