//! Observers for tournament reporting

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Error, Result,
    engine::{Board, GameOutcome, Player},
    ports::Observer,
    tournament::TournamentStats,
    utils::IntervalTimer,
};

/// Shows a progress bar over a fixed-length set.
///
/// Falls back to a spinner when the set length is unknown (predicate or
/// deadline stop conditions).
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    completed: u64,
}

impl ProgressObserver {
    pub fn new() -> Self {
        ProgressObserver {
            progress_bar: None,
            completed: 0,
        }
    }

    fn message(stats: &TournamentStats) -> String {
        format!("x:{} o:{} d:{}", stats.wins_x, stats.wins_o, stats.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_set_start(&mut self, total_games: Option<usize>) -> Result<()> {
        let pb = match total_games {
            Some(total) => {
                let pb = ProgressBar::new(total as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                        .map_err(|e| Error::ProgressBarTemplate {
                            message: e.to_string(),
                        })?
                        .progress_chars("=>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };
        self.progress_bar = Some(pb);
        self.completed = 0;
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _game_num: u64,
        _outcome: GameOutcome,
        stats: &TournamentStats,
    ) -> Result<()> {
        self.completed += 1;
        if let Some(pb) = &self.progress_bar {
            pb.set_position(self.completed);
            pb.set_message(Self::message(stats));
        }
        Ok(())
    }

    fn on_set_end(&mut self, stats: &TournamentStats) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(Self::message(stats));
        }
        Ok(())
    }
}

/// Prints a labelled stats line at most once per interval.
///
/// Used by the long-running training loops, where a per-game progress bar
/// would drown the terminal.
pub struct IntervalStatsObserver {
    label: String,
    timer: IntervalTimer,
}

impl IntervalStatsObserver {
    pub fn new(label: impl Into<String>, interval: Duration) -> Self {
        IntervalStatsObserver {
            label: label.into(),
            timer: IntervalTimer::new(interval),
        }
    }
}

impl Observer for IntervalStatsObserver {
    fn on_game_end(
        &mut self,
        _game_num: u64,
        _outcome: GameOutcome,
        stats: &TournamentStats,
    ) -> Result<()> {
        if self.timer.fire() {
            println!("[{}] {stats}", self.label);
        }
        Ok(())
    }

    fn on_set_end(&mut self, stats: &TournamentStats) -> Result<()> {
        println!("[{}] final: {stats}", self.label);
        Ok(())
    }
}

/// Prints the board after every ply and the outcome at the end.
pub struct EpisodePrinter;

impl Observer for EpisodePrinter {
    fn on_move(&mut self, board: &Board) -> Result<()> {
        println!("{board}");
        Ok(())
    }

    fn on_game_end(
        &mut self,
        _game_num: u64,
        outcome: GameOutcome,
        _stats: &TournamentStats,
    ) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => println!("x wins"),
            GameOutcome::Win(Player::O) => println!("o wins"),
            GameOutcome::Draw => println!("draw"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_observer_tracks_set_position() {
        let mut observer = ProgressObserver::new();
        observer.on_set_start(Some(10)).unwrap();

        let mut stats = TournamentStats::default();
        stats.record(GameOutcome::Draw);
        observer.on_game_end(1, GameOutcome::Draw, &stats).unwrap();
        assert_eq!(observer.completed, 1);

        observer.on_set_end(&stats).unwrap();
        assert!(observer.progress_bar.is_none());
    }

    #[test]
    fn test_progress_observer_without_known_length() {
        let mut observer = ProgressObserver::new();
        observer.on_set_start(None).unwrap();
        assert!(observer.progress_bar.is_some());
    }

    #[test]
    fn test_interval_observer_respects_interval() {
        // A very long interval never fires mid-set.
        let mut observer = IntervalStatsObserver::new("test", Duration::from_secs(3600));
        let mut stats = TournamentStats::default();
        stats.record(GameOutcome::Draw);
        observer.on_game_end(1, GameOutcome::Draw, &stats).unwrap();
        assert!(!observer.timer.fire());
    }
}
