//! Player identification.
//!
//! Red-Blue Nim is always played between exactly two sides: a human at the
//! input collaborator and the computer driven by the minimax search.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Computer => "computer",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Player::Human),
            "computer" => Ok(Player::Computer),
            other => Err(Error::InvalidConfiguration {
                message: format!("unknown player '{other}' (expected 'human' or 'computer')"),
            }),
        }
    }
}
