//! red-blue-nim CLI - play Red-Blue Nim against the computer
//!
//! ```text
//! red-blue-nim <NUM_RED> <NUM_BLUE> [--version standard|misere]
//!              [--first-player human|computer] [--depth N] [--autoplay-seed SEED]
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`
//! (e.g. `RUST_LOG=red_blue_nim=debug` to see every root candidate).

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use red_blue_nim::{
    ConsoleInput, ConsoleOutput, DepthLimit, Error, GameConfig, GameLoop, Player,
    RandomMoveSource, RuleVariant,
};

#[derive(Parser, Debug)]
#[command(name = "red-blue-nim")]
#[command(about = "Red-Blue Nim Game", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Number of red marbles
    num_red: u32,

    /// Number of blue marbles
    num_blue: u32,

    /// Game version: standard or misere
    #[arg(long, default_value = "standard")]
    version: RuleVariant,

    /// First player: human or computer
    #[arg(long, default_value = "computer")]
    first_player: Player,

    /// Search depth for the computer (unbounded if omitted)
    #[arg(long)]
    depth: Option<u32>,

    /// Replace the human with a seeded random player
    #[arg(long)]
    autoplay_seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.num_red, cli.num_blue)
        .with_variant(cli.version)
        .with_first_player(cli.first_player)
        .with_depth(DepthLimit::from(cli.depth));

    let mut game = GameLoop::new(&config).context("invalid game configuration")?;
    let mut output = ConsoleOutput::new(io::stdout());

    let outcome = match cli.autoplay_seed {
        Some(seed) => game.play(&mut RandomMoveSource::new(seed), &mut output),
        None => game.play(&mut ConsoleInput::stdio(), &mut output),
    };

    match outcome {
        Ok(_) => Ok(()),
        Err(Error::InputAborted) => {
            println!("\nGame abandoned.");
            Ok(())
        }
        Err(err) => Err(err).context("game terminated"),
    }
}
