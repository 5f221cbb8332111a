//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search works on the live `GameState` through `&mut`, applying a
//! candidate, recursing and undoing it before looking at the next one.
//! Every path out of a node, including cutoffs and errors, undoes the move
//! it applied, so the caller gets its state back unchanged.
//!
//! Values are always from the computer's point of view: the root maximizes,
//! replies minimize. Leaves are scored by `leaf_value`.

use std::time::Instant;

use tracing::debug;

use crate::core::{GameState, Move, RuleVariant};
use crate::error::{Error, Result};
use crate::rules::{MoveGenerator, VariantMoves};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Value of a leaf position: the score under standard rules, its negation
/// under misère.
#[must_use]
pub fn leaf_value(state: &GameState) -> i64 {
    match state.variant() {
        RuleVariant::Standard => state.score(),
        RuleVariant::Misere => -state.score(),
    }
}

/// Minimax search context.
///
/// Generic over the move generator. Holds the configuration and the
/// statistics of the last search; the state is borrowed per call.
pub struct MinimaxSearch<G: MoveGenerator = VariantMoves> {
    /// Candidate move policy.
    generator: G,

    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last `select_best_move` call.
    stats: SearchStats,
}

impl<G: MoveGenerator> MinimaxSearch<G> {
    /// Create a new search context.
    pub fn new(generator: G, config: SearchConfig) -> Self {
        Self {
            generator,
            config,
            stats: SearchStats::default(),
        }
    }

    /// Pick the computer's move.
    ///
    /// Among the legal candidates, the first one with the greatest value is
    /// chosen.
    ///
    /// Returns `Ok(None)` when the game is already over: once either pile is
    /// empty no further move may be played, even if a candidate such as
    /// `(0, 2)` would still fit the remaining marbles.
    ///
    /// ## Errors
    ///
    /// `Error::NoLegalMove` if the generator offers nothing legal in some
    /// non-terminal position reached by the search (including the root).
    pub fn select_best_move(&mut self, state: &mut GameState) -> Result<Option<Move>> {
        let start = Instant::now();
        self.stats.reset();

        if state.is_terminal() {
            return Ok(None);
        }

        let candidates = self.generator.legal_moves(state);
        if candidates.is_empty() {
            return Err(no_legal_move(state));
        }

        let mut best: Option<(Move, i64)> = None;
        for mv in candidates {
            let value = self.root_value(state, mv)?;
            debug!(%mv, value, "root candidate");

            // Strictly greater: the earliest candidate keeps ties.
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let chosen = best.map(|(mv, _)| mv);
        if let Some((mv, value)) = best {
            debug!(
                %mv,
                value,
                nodes = self.stats.nodes_visited,
                leaves = self.stats.leaves_evaluated,
                cutoffs = self.stats.cutoffs,
                max_ply = self.stats.max_ply,
                nps = self.stats.nodes_per_second(),
                "selected move"
            );
        }
        Ok(chosen)
    }

    /// Minimax value of playing `mv` from `state`, as the root would see it.
    ///
    /// ## Errors
    ///
    /// `Error::IllegalMove` if `mv` is not legal in `state`, or
    /// `Error::NoLegalMove` as for `select_best_move`.
    pub fn evaluate(&mut self, state: &mut GameState, mv: Move) -> Result<i64> {
        self.root_value(state, mv)
    }

    /// Apply a root candidate, search the reply tree with a full window, undo.
    fn root_value(&mut self, state: &mut GameState, mv: Move) -> Result<i64> {
        state.apply(mv)?;
        let depth = self.config.depth_limit.plies().map(|d| d.saturating_sub(1));
        let value = self.search(state, depth, 1, i64::MIN, i64::MAX, false);
        state.undo(mv);
        value
    }

    /// Value of `state`, whose move has already been applied by the caller.
    ///
    /// `depth` is `None` for unbounded search.
    fn search(
        &mut self,
        state: &mut GameState,
        depth: Option<u32>,
        ply: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> Result<i64> {
        self.stats.nodes_visited += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        if state.is_terminal() || depth == Some(0) {
            self.stats.leaves_evaluated += 1;
            return Ok(leaf_value(state));
        }

        let moves = self.generator.legal_moves(state);
        if moves.is_empty() {
            return Err(no_legal_move(state));
        }

        let child_depth = depth.map(|d| d - 1);
        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for mv in moves {
            state.apply(mv)?;
            let value = self.search(state, child_depth, ply + 1, alpha, beta, !maximizing);
            state.undo(mv);
            let value = value?;

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }

            if self.config.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    /// Get search statistics of the last `select_best_move` call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

fn no_legal_move(state: &GameState) -> Error {
    Error::NoLegalMove {
        red: state.red(),
        blue: state.blue(),
        variant: state.variant(),
    }
}
