//! A seeded random stand-in for the human player.

use crate::core::{GameRng, GameState, Move};
use crate::error::{Error, Result};

use super::session::MoveSource;

/// Plays a uniformly random legal move each turn.
///
/// Unlike the computer, it may take any number of marbles of either colour.
#[derive(Clone, Debug)]
pub struct RandomMoveSource {
    rng: GameRng,
}

impl RandomMoveSource {
    /// Create a source with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl MoveSource for RandomMoveSource {
    fn next_move(&mut self, state: &GameState) -> Result<Move> {
        if state.red() == 0 && state.blue() == 0 {
            return Err(Error::NoLegalMove {
                red: 0,
                blue: 0,
                variant: state.variant(),
            });
        }

        // Rejection sampling over the (red + 1) x (blue + 1) grid minus (0, 0).
        loop {
            let mv = Move::new(
                self.rng.gen_range_u32(0..=state.red()),
                self.rng.gen_range_u32(0..=state.blue()),
            );
            if state.is_legal(mv) {
                return Ok(mv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_moves_are_legal() {
        let state = GameState::new(&GameConfig::new(3, 5)).unwrap();
        let mut source = RandomMoveSource::new(9);

        for _ in 0..100 {
            let mv = source.next_move(&state).unwrap();
            assert!(state.is_legal(mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let state = GameState::new(&GameConfig::new(6, 6)).unwrap();
        let mut a = RandomMoveSource::new(1234);
        let mut b = RandomMoveSource::new(1234);

        for _ in 0..20 {
            assert_eq!(a.next_move(&state).unwrap(), b.next_move(&state).unwrap());
        }
    }

    #[test]
    fn test_single_marble_piles() {
        let state = GameState::new(&GameConfig::new(1, 1)).unwrap();
        let mut source = RandomMoveSource::new(0);
        let mv = source.next_move(&state).unwrap();
        assert!([Move::new(1, 0), Move::new(0, 1), Move::new(1, 1)].contains(&mv));
    }
}
