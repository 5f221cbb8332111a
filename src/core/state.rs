//! Game state: marble counts, rule variant and the side to move.
//!
//! ## GameState
//!
//! A single `GameState` lives for the whole game. It is mutated in place:
//! - by the game loop, once per committed move
//! - by the search, which pairs every `apply` with an `undo`
//!
//! The rule variant and depth limit never change after construction.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::config::{DepthLimit, GameConfig, RuleVariant};
use super::player::Player;
use crate::error::{Error, Result};

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    red: u32,
    blue: u32,
    variant: RuleVariant,

    /// Player to move.
    pub active_player: Player,

    depth_limit: DepthLimit,
}

impl GameState {
    /// Create the starting state from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            red: config.red,
            blue: config.blue,
            variant: config.variant,
            active_player: config.first_player,
            depth_limit: config.depth,
        })
    }

    /// Red marbles remaining.
    #[must_use]
    pub fn red(&self) -> u32 {
        self.red
    }

    /// Blue marbles remaining.
    #[must_use]
    pub fn blue(&self) -> u32 {
        self.blue
    }

    /// The rule variant.
    #[must_use]
    pub fn variant(&self) -> RuleVariant {
        self.variant
    }

    /// The computer's search depth limit.
    #[must_use]
    pub fn depth_limit(&self) -> DepthLimit {
        self.depth_limit
    }

    /// The game is over once either pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.red == 0 || self.blue == 0
    }

    /// `2 * red + 3 * blue`, independent of the variant.
    #[must_use]
    pub fn score(&self) -> i64 {
        2 * i64::from(self.red) + 3 * i64::from(self.blue)
    }

    /// True if `mv` takes at least one marble and no more than is available.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.red <= self.red && mv.blue <= self.blue && !mv.is_empty()
    }

    /// Remove the marbles taken by `mv`.
    ///
    /// Leaves the state untouched and returns `Error::IllegalMove` if the move
    /// is not legal here.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        if !self.is_legal(mv) {
            return Err(Error::IllegalMove {
                mv,
                red: self.red,
                blue: self.blue,
            });
        }
        self.red -= mv.red;
        self.blue -= mv.blue;
        Ok(())
    }

    /// Put back the marbles taken by a previously applied `mv`.
    ///
    /// Not checked: the caller must only undo moves it applied, in reverse order.
    pub fn undo(&mut self, mv: Move) {
        self.red += mv.red;
        self.blue += mv.blue;
    }

    /// Hand the turn to the other player.
    pub fn switch_active_player(&mut self) {
        self.active_player = self.active_player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(red: u32, blue: u32) -> GameState {
        GameState::new(&GameConfig::new(red, blue)).unwrap()
    }

    #[test]
    fn test_game_state_new() {
        let config = GameConfig::new(3, 5)
            .with_variant(RuleVariant::Misere)
            .with_first_player(Player::Human)
            .with_depth(DepthLimit::Plies(4));
        let state = GameState::new(&config).unwrap();

        assert_eq!(state.red(), 3);
        assert_eq!(state.blue(), 5);
        assert_eq!(state.variant(), RuleVariant::Misere);
        assert_eq!(state.active_player, Player::Human);
        assert_eq!(state.depth_limit(), DepthLimit::Plies(4));
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_game_state_new_rejects_invalid() {
        assert!(matches!(
            GameState::new(&GameConfig::new(0, 5)),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_score() {
        assert_eq!(state(3, 5).score(), 21);
        assert_eq!(state(1, 1).score(), 5);
    }

    #[test]
    fn test_score_empty() {
        let mut s = state(2, 1);
        s.apply(Move::new(2, 1)).unwrap();
        assert_eq!(s.score(), 0);
        assert!(s.is_terminal());
    }

    #[test]
    fn test_is_legal() {
        let s = state(2, 3);
        assert!(s.is_legal(Move::new(2, 0)));
        assert!(s.is_legal(Move::new(0, 3)));
        assert!(s.is_legal(Move::new(2, 3)));
        assert!(!s.is_legal(Move::new(0, 0)));
        assert!(!s.is_legal(Move::new(3, 0)));
        assert!(!s.is_legal(Move::new(0, 4)));
    }

    #[test]
    fn test_apply_and_undo() {
        let mut s = state(4, 4);
        s.apply(Move::new(1, 2)).unwrap();
        assert_eq!((s.red(), s.blue()), (3, 2));

        s.undo(Move::new(1, 2));
        assert_eq!((s.red(), s.blue()), (4, 4));
    }

    #[test]
    fn test_apply_illegal_leaves_state() {
        let mut s = state(2, 2);
        let before = s.clone();

        let err = s.apply(Move::new(3, 0)).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { red: 2, blue: 2, .. }));
        assert_eq!(s, before);
    }

    #[test]
    fn test_terminal_when_either_pile_empty() {
        let mut s = state(1, 5);
        s.apply(Move::new(1, 0)).unwrap();
        assert!(s.is_terminal());

        let mut s = state(5, 1);
        s.apply(Move::new(0, 1)).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn test_switch_active_player() {
        let mut s = state(1, 1);
        assert_eq!(s.active_player, Player::Computer);
        s.switch_active_player();
        assert_eq!(s.active_player, Player::Human);
        s.switch_active_player();
        assert_eq!(s.active_player, Player::Computer);
    }

    #[test]
    fn test_state_serialization() {
        let s = state(3, 4);
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }
}
