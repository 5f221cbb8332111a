//! Move generation for the computer player.
//!
//! The computer never considers every legal move. It tries a small, fixed
//! candidate list per variant and keeps the ones legal in the current state,
//! in list order. That order decides ties in the search: the first candidate
//! reaching the best value wins.

use smallvec::SmallVec;

use crate::core::{GameState, Move, RuleVariant};

/// Candidate list used by the computer under standard rules.
pub const STANDARD_CANDIDATES: [Move; 4] = [
    Move::new(2, 0),
    Move::new(0, 2),
    Move::new(1, 0),
    Move::new(0, 1),
];

/// Candidate list used by the computer under misère rules.
pub const MISERE_CANDIDATES: [Move; 4] = [
    Move::new(0, 1),
    Move::new(1, 0),
    Move::new(0, 2),
    Move::new(2, 0),
];

/// Legal moves after filtering. Four fit inline for the built-in lists.
pub type MoveList = SmallVec<[Move; 4]>;

/// Move generation policy.
///
/// Implementations supply an ordered candidate list per variant; the
/// default `legal_moves` keeps the candidates legal in a given state.
///
/// ## Implementation Notes
///
/// - `candidates` must be deterministic: the search relies on a stable order
/// - A policy that yields nothing for some non-terminal state is a
///   configuration error and surfaces as `Error::NoLegalMove`
pub trait MoveGenerator {
    /// Ordered candidate moves for a variant.
    fn candidates(&self, variant: RuleVariant) -> &[Move];

    /// Candidates legal in `state`, in candidate order.
    fn legal_moves(&self, state: &GameState) -> MoveList {
        self.candidates(state.variant())
            .iter()
            .copied()
            .filter(|&mv| state.is_legal(mv))
            .collect()
    }
}

/// The fixed per-variant candidate tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct VariantMoves;

impl MoveGenerator for VariantMoves {
    fn candidates(&self, variant: RuleVariant) -> &[Move] {
        match variant {
            RuleVariant::Standard => &STANDARD_CANDIDATES,
            RuleVariant::Misere => &MISERE_CANDIDATES,
        }
    }
}
