//! Line-based console collaborators for the `red-blue-nim` binary.
//!
//! Both are generic over their reader/writer so the same code runs against
//! stdin/stdout and against in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::core::{GameState, Move};
use crate::error::{Error, Result};
use crate::rules::GameResult;

use super::session::{GameObserver, MoveSource};

/// Parse one marble count typed by the human.
///
/// `q` or `quit` aborts the game.
pub fn parse_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Err(Error::InputAborted);
    }

    let invalid = |reason: &str| Error::InvalidMoveInput {
        input: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let value: i64 = trimmed.parse().map_err(|_| invalid("expected an integer"))?;
    if value < 0 {
        return Err(invalid("count must not be negative"));
    }
    u32::try_from(value).map_err(|_| invalid("count is too large"))
}

/// Reads the human's move as two prompted integers.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_count(&mut self, prompt: &str) -> Result<u32> {
        write!(self.writer, "{prompt}").map_err(|e| Error::io("write prompt", e))?;
        self.writer
            .flush()
            .map_err(|e| Error::io("flush prompt", e))?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .map_err(|e| Error::io("read move", e))?;
        if read == 0 {
            return Err(Error::InputAborted);
        }
        parse_count(&line)
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsoleInput<R, W> {
    fn next_move(&mut self, _state: &GameState) -> Result<Move> {
        let red = self.read_count("Enter number of red marbles to take: ")?;
        let blue = self.read_count("Enter number of blue marbles to take: ")?;
        Ok(Move::new(red, blue))
    }
}

/// Prints game events as text.
pub struct ConsoleOutput<W> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.writer, "{text}").map_err(|e| Error::io("write game output", e))
    }
}

impl<W: Write> GameObserver for ConsoleOutput<W> {
    fn on_human_prompt(&mut self, state: &GameState) -> Result<()> {
        self.line(format_args!(
            "Your turn. Red marbles: {}, Blue marbles: {}",
            state.red(),
            state.blue()
        ))
    }

    fn on_invalid_input(&mut self, error: &Error) -> Result<()> {
        match error {
            Error::IllegalMove { .. } => self.line(format_args!("Invalid move. Try again.")),
            _ => self.line(format_args!(
                "Invalid input. Please enter non-negative integers."
            )),
        }
    }

    fn on_computer_move(&mut self, mv: Move) -> Result<()> {
        self.line(format_args!(
            "Computer takes {} red marbles and {} blue marbles.",
            mv.red, mv.blue
        ))
    }

    fn on_game_over(&mut self, result: &GameResult) -> Result<()> {
        self.line(format_args!("Game over! {} wins!", result.winner))?;
        self.line(format_args!("Final Score: {}", result.final_score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn state() -> GameState {
        GameState::new(&GameConfig::new(3, 4)).unwrap()
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count("  0\n").unwrap(), 0);
    }

    #[test]
    fn test_parse_count_rejects_malformed() {
        for input in ["", "abc", "1.5", "-1", "99999999999"] {
            assert!(
                matches!(parse_count(input), Err(Error::InvalidMoveInput { .. })),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_parse_count_quit() {
        assert!(matches!(parse_count("q"), Err(Error::InputAborted)));
        assert!(matches!(parse_count("QUIT\n"), Err(Error::InputAborted)));
    }

    #[test]
    fn test_console_input_reads_two_counts() {
        let mut prompts = Vec::new();
        let mut input = ConsoleInput::new("2\n1\n".as_bytes(), &mut prompts);

        let mv = input.next_move(&state()).unwrap();
        assert_eq!(mv, Move::new(2, 1));

        let prompts = String::from_utf8(prompts).unwrap();
        assert!(prompts.contains("red marbles"));
        assert!(prompts.contains("blue marbles"));
    }

    #[test]
    fn test_console_input_eof_aborts() {
        let mut input = ConsoleInput::new("1\n".as_bytes(), io::sink());
        assert!(matches!(input.next_move(&state()), Err(Error::InputAborted)));
    }

    #[test]
    fn test_console_output_messages() {
        let mut output = ConsoleOutput::new(Vec::new());
        let mut s = state();

        output.on_turn_start(&s).unwrap(); // silent
        s.switch_active_player();
        output.on_human_prompt(&s).unwrap();
        output.on_computer_move(Move::new(0, 2)).unwrap();
        output
            .on_invalid_input(&Error::IllegalMove {
                mv: Move::new(9, 0),
                red: 3,
                blue: 4,
            })
            .unwrap();

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(
            text,
            "Your turn. Red marbles: 3, Blue marbles: 4\n\
             Computer takes 0 red marbles and 2 blue marbles.\n\
             Invalid move. Try again.\n"
        );
    }
}
