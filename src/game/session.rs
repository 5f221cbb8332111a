//! Turn-taking between the human input and the computer search.

use tracing::{info, trace, warn};

use crate::core::{GameConfig, GameState, Move, MoveRecord, Player};
use crate::error::{Error, Result};
use crate::rules::{GameResult, MoveGenerator, VariantMoves};
use crate::search::{MinimaxSearch, SearchConfig};

/// Supplies the human player's moves.
///
/// ## Implementation Notes
///
/// - Return `Error::InvalidMoveInput` for malformed input; the loop asks again
/// - Return `Error::InputAborted` to end the session
/// - Legality is checked by the loop, not the source
pub trait MoveSource {
    /// Next move for the human in `state`.
    fn next_move(&mut self, state: &GameState) -> Result<Move>;
}

/// Receives game events as plain data.
///
/// Only the computer's moves and the final result are required; the other
/// hooks default to doing nothing.
pub trait GameObserver {
    /// A turn is about to be played from `state`.
    fn on_turn_start(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// The human is about to be asked for a move; repeated after every
    /// rejected attempt.
    fn on_human_prompt(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }

    /// A human move was rejected and will be asked for again.
    fn on_invalid_input(&mut self, _error: &Error) -> Result<()> {
        Ok(())
    }

    /// The computer committed `mv`.
    fn on_computer_move(&mut self, mv: Move) -> Result<()>;

    /// The game is over.
    fn on_game_over(&mut self, result: &GameResult) -> Result<()>;
}

/// Whether the game can continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Terminal,
}

/// One game from the first move to the result.
///
/// Owns the single `GameState` of the game and lends it to the search on
/// the computer's turns.
pub struct GameLoop<G: MoveGenerator = VariantMoves> {
    state: GameState,
    search: MinimaxSearch<G>,
    history: Vec<MoveRecord>,
}

impl GameLoop<VariantMoves> {
    /// Validate `config` and set up a game with the standard candidate tables.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let state = GameState::new(config)?;
        let search = MinimaxSearch::new(VariantMoves, SearchConfig::for_state(&state));
        Ok(Self::with_search(state, search))
    }
}

impl<G: MoveGenerator> GameLoop<G> {
    /// Set up a game from an existing state and search.
    pub fn with_search(state: GameState, search: MinimaxSearch<G>) -> Self {
        Self {
            state,
            search,
            history: Vec::new(),
        }
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves committed so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Whether the game can continue.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.state.is_terminal() {
            Phase::Terminal
        } else {
            Phase::InProgress
        }
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.state.is_terminal() {
            return None;
        }
        GameResult::from_terminal(&self.state, self.history.clone())
    }

    /// Play turns until a pile is empty, then report the result.
    pub fn play(
        &mut self,
        input: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<GameResult> {
        info!(
            red = self.state.red(),
            blue = self.state.blue(),
            variant = %self.state.variant(),
            first = %self.state.active_player,
            depth = %self.state.depth_limit(),
            "game started"
        );

        loop {
            if let Some(result) = self.result() {
                info!(
                    winner = %result.winner,
                    final_score = result.final_score,
                    plies = result.plies(),
                    "game over"
                );
                observer.on_game_over(&result)?;
                return Ok(result);
            }
            self.step(input, observer)?;
        }
    }

    /// Play a single turn. Does nothing once the game is over.
    ///
    /// Returns the phase after the turn.
    pub fn step(
        &mut self,
        input: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<Phase> {
        if self.state.is_terminal() {
            return Ok(Phase::Terminal);
        }

        observer.on_turn_start(&self.state)?;

        let player = self.state.active_player;
        let mv = match player {
            Player::Human => self.human_turn(input, observer)?,
            Player::Computer => self.computer_turn(observer)?,
        };

        let record = MoveRecord::new(
            self.history.len() as u32 + 1,
            player,
            mv,
            self.state.red(),
            self.state.blue(),
        );
        trace!(
            ply = record.ply,
            %player,
            %mv,
            red = record.red_after,
            blue = record.blue_after,
            "move committed"
        );
        self.history.push(record);

        self.state.switch_active_player();
        Ok(self.phase())
    }

    /// Ask for human moves until one is legal, then apply it.
    fn human_turn(
        &mut self,
        input: &mut dyn MoveSource,
        observer: &mut dyn GameObserver,
    ) -> Result<Move> {
        loop {
            observer.on_human_prompt(&self.state)?;
            let attempt = match input.next_move(&self.state) {
                Ok(mv) => self.state.apply(mv).map(|()| mv),
                Err(err) => Err(err),
            };

            match attempt {
                Ok(mv) => return Ok(mv),
                Err(err) if err.is_recoverable_input() => {
                    warn!(%err, "rejected human move");
                    observer.on_invalid_input(&err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Let the search pick a move and apply it.
    fn computer_turn(&mut self, observer: &mut dyn GameObserver) -> Result<Move> {
        let mv = self
            .search
            .select_best_move(&mut self.state)?
            .ok_or_else(|| Error::NoLegalMove {
                red: self.state.red(),
                blue: self.state.blue(),
                variant: self.state.variant(),
            })?;

        self.state.apply(mv)?;
        observer.on_computer_move(mv)?;
        Ok(mv)
    }
}
