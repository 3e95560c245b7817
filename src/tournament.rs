//! Strategy-vs-strategy episode sets with stats and stop conditions

pub mod driver;
pub mod observers;
pub mod players;

pub use driver::{StopCondition, Tournament, TournamentStats};
pub use observers::{EpisodePrinter, IntervalStatsObserver, ProgressObserver};
pub use players::{MinimaxStrategy, ModelStrategy, ModelTrainer, RandomStrategy};
