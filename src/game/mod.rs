//! Playing a game: the turn loop and the collaborators it talks to.
//!
//! - `session`: `GameLoop`, plus the `MoveSource` / `GameObserver` seams
//! - `console`: stdin/stdout implementations used by the binary
//! - `random`: a seeded random player for autoplay and tests

mod console;
mod random;
mod session;

pub use console::{parse_count, ConsoleInput, ConsoleOutput};
pub use random::RandomMoveSource;
pub use session::{GameLoop, GameObserver, MoveSource, Phase};
