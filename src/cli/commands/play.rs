//! Play command - watch a single game between two strategies

use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    Error,
    model::SavedModel,
    ports::Strategy,
    tournament::{EpisodePrinter, MinimaxStrategy, ModelStrategy, RandomStrategy, Tournament},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Random,
    Minimax,
    /// Value model loaded from --model
    Model,
}

#[derive(Debug, Parser)]
pub struct PlayArgs {
    /// Strategy for the x seat
    #[arg(long, value_enum, default_value_t = PlayerKind::Minimax)]
    pub x: PlayerKind,

    /// Strategy for the o seat
    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    pub o: PlayerKind,

    /// Model snapshot for model players
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let strategy_x = build_strategy(args.x, &args.model, seed)?;
    let strategy_o = build_strategy(args.o, &args.model, seed.wrapping_add(1))?;

    let mut tournament = Tournament::with_seed(strategy_x, strategy_o, seed.wrapping_add(2));
    tournament.add_observer(Box::new(EpisodePrinter));
    tournament.play_game()?;
    Ok(())
}

fn build_strategy(
    kind: PlayerKind,
    model_path: &Option<PathBuf>,
    seed: u64,
) -> Result<Box<dyn Strategy>> {
    Ok(match kind {
        PlayerKind::Random => Box::new(RandomStrategy::with_seed(seed)),
        PlayerKind::Minimax => Box::new(MinimaxStrategy),
        PlayerKind::Model => {
            let path = model_path.as_ref().ok_or_else(|| Error::InvalidConfiguration {
                message: "--model is required for model players".to_string(),
            })?;
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read model snapshot {}", path.display()))?;
            let model = SavedModel::from_json(&json)?.into_model()?;
            Box::new(ModelStrategy::new(Arc::new(Mutex::new(model))))
        }
    })
}
