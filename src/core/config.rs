//! Game configuration types.
//!
//! A game is configured once, before the first turn:
//! - `RuleVariant`: standard or misère scoring and winner polarity
//! - `DepthLimit`: how far the computer may look ahead
//! - `GameConfig`: combines the starting counts with the above
//!
//! `GameConfig::validate` is the only gate into a `GameState`; nothing is
//! re-checked after construction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::Player;
use crate::error::{Error, Result};

/// Rule variant. Fixed for the whole game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleVariant {
    /// Leaf values are the raw score.
    #[default]
    Standard,
    /// Leaf values are the negated score; winner polarity is inverted.
    Misere,
}

impl RuleVariant {
    /// Lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleVariant::Standard => "standard",
            RuleVariant::Misere => "misere",
        }
    }
}

impl std::fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RuleVariant::Standard),
            "misere" => Ok(RuleVariant::Misere),
            other => Err(Error::InvalidConfiguration {
                message: format!("unknown rule variant '{other}' (expected 'standard' or 'misere')"),
            }),
        }
    }
}

/// Maximum search depth for the computer player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthLimit {
    /// Search until every line reaches a terminal position.
    #[default]
    Unbounded,
    /// Look at most this many plies ahead (must be positive).
    Plies(u32),
}

impl DepthLimit {
    /// The ply limit, or `None` when unbounded.
    #[must_use]
    pub const fn plies(self) -> Option<u32> {
        match self {
            DepthLimit::Unbounded => None,
            DepthLimit::Plies(n) => Some(n),
        }
    }
}

impl From<Option<u32>> for DepthLimit {
    fn from(depth: Option<u32>) -> Self {
        depth.map_or(DepthLimit::Unbounded, DepthLimit::Plies)
    }
}

impl std::fmt::Display for DepthLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepthLimit::Unbounded => f.write_str("unbounded"),
            DepthLimit::Plies(n) => write!(f, "{n} plies"),
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use red_blue_nim::core::{DepthLimit, GameConfig, Player, RuleVariant};
///
/// let config = GameConfig::new(5, 7)
///     .with_variant(RuleVariant::Misere)
///     .with_first_player(Player::Human)
///     .with_depth(DepthLimit::Plies(4));
///
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(0, 5).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Starting red marbles (must be positive).
    pub red: u32,

    /// Starting blue marbles (must be positive).
    pub blue: u32,

    /// Rule variant (default: standard).
    pub variant: RuleVariant,

    /// Who moves first (default: computer).
    pub first_player: Player,

    /// Computer search depth (default: unbounded).
    pub depth: DepthLimit,
}

impl GameConfig {
    /// Create a configuration with the given counts and default options.
    #[must_use]
    pub fn new(red: u32, blue: u32) -> Self {
        Self {
            red,
            blue,
            variant: RuleVariant::default(),
            first_player: Player::Computer,
            depth: DepthLimit::default(),
        }
    }

    /// Set the rule variant.
    #[must_use]
    pub fn with_variant(mut self, variant: RuleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the first player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the search depth limit.
    #[must_use]
    pub fn with_depth(mut self, depth: DepthLimit) -> Self {
        self.depth = depth;
        self
    }

    /// Check the configuration before any turn is taken.
    pub fn validate(&self) -> Result<()> {
        if self.red == 0 {
            return Err(Error::InvalidConfiguration {
                message: "red marble count must be a positive integer".to_string(),
            });
        }
        if self.blue == 0 {
            return Err(Error::InvalidConfiguration {
                message: "blue marble count must be a positive integer".to_string(),
            });
        }
        if self.depth == DepthLimit::Plies(0) {
            return Err(Error::InvalidConfiguration {
                message: "search depth must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}
