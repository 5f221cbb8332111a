//! Core game types: players, moves, configuration, state, RNG.
//!
//! Everything here is a leaf: no module in `core` depends on the rules,
//! the search or the game loop.

pub mod player;
pub mod action;
pub mod config;
pub mod state;
pub mod rng;

pub use player::Player;
pub use action::{Move, MoveRecord};
pub use config::{DepthLimit, GameConfig, RuleVariant};
pub use state::GameState;
pub use rng::GameRng;
