//! Train command - run the training loops and rotate checkpoints

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::{
    checkpoint::Checkpoint,
    engine::Player,
    model::{SavedModel, TrainingMetadata, ValueModel},
    ports::Strategy,
    tournament::{
        IntervalStatsObserver, MinimaxStrategy, ModelStrategy, ModelTrainer, RandomStrategy,
        StopCondition, Tournament,
    },
    utils::session_name,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Opponent {
    /// Uniformly random baseline
    Random,
    /// Exhaustive-search baseline
    Minimax,
    /// Genetic self-play: the model trains against a clone of itself
    SelfPlay,
}

impl Opponent {
    fn label(self) -> &'static str {
        match self {
            Opponent::Random => "random",
            Opponent::Minimax => "minimax",
            Opponent::SelfPlay => "self-play",
        }
    }
}

#[derive(Debug, Parser)]
pub struct TrainArgs {
    /// Opponent to train against
    #[arg(value_enum)]
    pub opponent: Opponent,

    /// Directory for checkpoint files
    #[arg(long, default_value = "models")]
    pub model_dir: std::path::PathBuf,

    /// Base name for checkpoint files (defaults to a timestamped session name)
    #[arg(long)]
    pub name: Option<String>,

    /// Resume from the named checkpoint instead of starting fresh
    #[arg(long)]
    pub resume: bool,

    /// Number of games against a baseline opponent
    #[arg(long, default_value_t = 1000)]
    pub games: usize,

    /// Stop after this many seconds instead of a game count
    #[arg(long)]
    pub duration_secs: Option<u64>,

    /// Number of self-play generations
    #[arg(long, default_value_t = 10)]
    pub generations: usize,

    /// Games per self-play set
    #[arg(long, default_value_t = 64)]
    pub set_games: usize,

    /// Evaluation games per baseline after each generation
    #[arg(long, default_value_t = 100)]
    pub eval_games: usize,

    /// Learning rate for value updates
    #[arg(long, default_value_t = crate::model::value::DEFAULT_LEARNING_RATE)]
    pub learning_rate: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds between stat reports
    #[arg(long, default_value_t = 5)]
    pub report_secs: u64,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    validate(&args)?;

    std::fs::create_dir_all(&args.model_dir).with_context(|| {
        format!(
            "failed to create model directory {}",
            args.model_dir.display()
        )
    })?;

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| session_name("selfplay"));
    let checkpoint = Checkpoint::new(&args.model_dir, &name);

    let model = if args.resume && checkpoint.exists() {
        let model = SavedModel::from_json(&checkpoint.load()?)?.into_model()?;
        println!(
            "resuming {name} ({} games trained, {} states)",
            model.games_trained(),
            model.states_seen()
        );
        model
    } else {
        ValueModel::with_learning_rate(args.learning_rate)
    };

    match args.opponent {
        Opponent::SelfPlay => train_self_play(&args, model, &checkpoint),
        Opponent::Random | Opponent::Minimax => train_vs_baseline(&args, model, &checkpoint),
    }
}

fn validate(args: &TrainArgs) -> Result<()> {
    if !(args.learning_rate > 0.0 && args.learning_rate <= 1.0) {
        return Err(crate::Error::InvalidConfiguration {
            message: format!(
                "learning rate must be in (0, 1], got {}",
                args.learning_rate
            ),
        }
        .into());
    }
    if args.opponent == Opponent::SelfPlay && (args.set_games == 0 || args.generations == 0) {
        return Err(crate::Error::InvalidConfiguration {
            message: "self-play needs at least one generation and one game per set".to_string(),
        }
        .into());
    }
    if args.opponent != Opponent::SelfPlay && args.games == 0 && args.duration_secs.is_none() {
        return Err(crate::Error::InvalidConfiguration {
            message: "baseline training needs --games or --duration-secs".to_string(),
        }
        .into());
    }
    Ok(())
}

fn base_seed(args: &TrainArgs) -> u64 {
    args.seed.unwrap_or_else(rand::random)
}

fn baseline_strategy(opponent: Opponent, seed: u64) -> Box<dyn Strategy> {
    match opponent {
        Opponent::Random => Box::new(RandomStrategy::with_seed(seed)),
        Opponent::Minimax => Box::new(MinimaxStrategy),
        Opponent::SelfPlay => unreachable!("self-play has no baseline seat"),
    }
}

fn save_checkpoint(
    checkpoint: &Checkpoint,
    model: &Arc<Mutex<ValueModel>>,
    opponents: &[String],
    seed: Option<u64>,
) -> crate::Result<()> {
    let model = model.lock().expect("model mutex poisoned");
    let metadata = TrainingMetadata {
        games_trained: model.games_trained(),
        opponents: opponents.to_vec(),
        seed,
    };
    checkpoint.save(&SavedModel::new(&model, metadata).to_json()?)
}

/// Model as X against a frozen baseline as O. The model trains on every
/// episode and the checkpoint rotates after every episode.
fn train_vs_baseline(args: &TrainArgs, model: ValueModel, checkpoint: &Checkpoint) -> Result<()> {
    let seed = base_seed(args);
    let label = args.opponent.label();
    let opponents = vec![label.to_string()];

    let shared = Arc::new(Mutex::new(model));
    let mut tournament = Tournament::with_seed(
        Box::new(ModelStrategy::new(shared.clone())),
        baseline_strategy(args.opponent, seed.wrapping_add(1)),
        seed,
    );
    tournament.add_trainer(Box::new(ModelTrainer::new(shared.clone())));
    tournament.add_observer(Box::new(IntervalStatsObserver::new(
        format!("vs {label}"),
        Duration::from_secs(args.report_secs),
    )));

    let deadline = args
        .duration_secs
        .map(|secs| Instant::now() + Duration::from_secs(secs));
    let mut games_played = 0usize;

    loop {
        tournament.play_game()?;
        games_played += 1;
        save_checkpoint(checkpoint, &shared, &opponents, args.seed)?;

        let done = match deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => games_played >= args.games,
        };
        if done {
            break;
        }
    }

    println!("trained {games_played} games vs {label}: {}", tournament.stats());
    println!("checkpoint: {}", checkpoint.current_path().display());
    Ok(())
}

/// Genetic self-play. Each generation clones the parent into both seats,
/// plays a training set, promotes the set leader's clone (X on a tie) to
/// parent, rotates the checkpoint, and evaluates the new parent frozen
/// against both baselines.
fn train_self_play(args: &TrainArgs, model: ValueModel, checkpoint: &Checkpoint) -> Result<()> {
    let seed = base_seed(args);
    let opponents = vec!["self-play".to_string()];
    let mut parent = model;

    for generation in 0..args.generations {
        let generation_seed = seed.wrapping_add(generation as u64);
        let seat_x = Arc::new(Mutex::new(parent.clone()));
        let seat_o = Arc::new(Mutex::new(parent.clone()));

        let mut tournament = Tournament::with_seed(
            Box::new(ModelStrategy::named(seat_x.clone(), "model-x")),
            Box::new(ModelStrategy::named(seat_o.clone(), "model-o")),
            generation_seed,
        );
        tournament.add_trainer(Box::new(ModelTrainer::new(seat_x.clone())));
        tournament.add_trainer(Box::new(ModelTrainer::new(seat_o.clone())));

        let leader = tournament.play_set(StopCondition::Games(args.set_games))?;
        let promoted = match leader {
            Some(Player::O) => &seat_o,
            _ => &seat_x,
        };
        parent = promoted.lock().expect("model mutex poisoned").clone();

        save_checkpoint(checkpoint, promoted, &opponents, args.seed)?;
        println!(
            "generation {}/{}: {} (promoted {})",
            generation + 1,
            args.generations,
            tournament.stats(),
            match leader {
                Some(Player::O) => "o",
                _ => "x",
            }
        );

        if args.eval_games > 0 {
            evaluate(&parent, args, generation_seed)?;
        }
    }

    println!("checkpoint: {}", checkpoint.current_path().display());
    Ok(())
}

/// Frozen evaluation of a model against both baselines.
fn evaluate(model: &ValueModel, args: &TrainArgs, seed: u64) -> Result<()> {
    for opponent in [Opponent::Random, Opponent::Minimax] {
        let frozen = Arc::new(Mutex::new(model.clone()));
        let mut tournament = Tournament::with_seed(
            Box::new(ModelStrategy::new(frozen)),
            baseline_strategy(opponent, seed.wrapping_add(2)),
            seed.wrapping_add(3),
        );
        tournament.play_set(StopCondition::Games(args.eval_games))?;
        println!("  eval vs {}: {}", opponent.label(), tournament.stats());
    }
    Ok(())
}
