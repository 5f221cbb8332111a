//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::{DepthLimit, GameState};

/// Minimax search configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How far ahead to look (default: unbounded).
    /// Unbounded search stops only at terminal positions.
    pub depth_limit: DepthLimit,

    /// Alpha-beta cutoffs (default: true).
    /// Disabling runs plain minimax over the same move order; the chosen
    /// move is identical, only more nodes are visited.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth_limit: DepthLimit::Unbounded,
            pruning: true,
        }
    }
}

impl SearchConfig {
    /// Config using the depth limit the game was created with.
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        Self::default().with_depth_limit(state.depth_limit())
    }

    /// Set the depth limit.
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: DepthLimit) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Enable or disable alpha-beta cutoffs.
    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }
}
