//! selfplay CLI - train and watch tic-tac-toe strategies
//!
//! Subcommands:
//! - `train`: run a training loop against a baseline or in self-play,
//!   rotating model checkpoints on disk
//! - `play`: play one game between two strategies, printing the board
//!   after every ply

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "selfplay")]
#[command(version, about = "Self-play reinforcement learning for tic-tac-toe")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a value model and rotate checkpoints
    Train(selfplay::cli::commands::train::TrainArgs),

    /// Play a single game between two strategies
    Play(selfplay::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => selfplay::cli::commands::train::execute(args),
        Commands::Play(args) => selfplay::cli::commands::play::execute(args),
    }
}
