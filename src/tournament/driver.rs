//! Episode-set driver
//!
//! A [`Tournament`] owns one reusable [`Board`] and a strategy for each
//! seat. It plays episodes by alternating strategy queries, breaking ties
//! among the returned candidates uniformly with its own seeded generator,
//! and notifies registered trainers and observers after every episode.

use std::{fmt, time::Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    engine::{Board, GameOutcome, Player},
    ports::{Observer, Strategy, Trainer},
};

/// Cumulative episode counters.
///
/// Counters only ever grow; a set's contribution is recovered with
/// [`since`](TournamentStats::since), and [`reset`](Tournament::reset_stats)
/// on the tournament is the only way to zero them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStats {
    pub wins_x: u64,
    pub wins_o: u64,
    pub draws: u64,
    pub total: u64,
}

impl TournamentStats {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.wins_x += 1,
            GameOutcome::Win(Player::O) => self.wins_o += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total += 1;
    }

    /// Counter delta against an earlier snapshot of the same counters.
    pub fn since(&self, earlier: &TournamentStats) -> TournamentStats {
        TournamentStats {
            wins_x: self.wins_x - earlier.wins_x,
            wins_o: self.wins_o - earlier.wins_o,
            draws: self.draws - earlier.draws,
            total: self.total - earlier.total,
        }
    }

    /// The player with more wins, or `None` on a tie.
    pub fn leader(&self) -> Option<Player> {
        match self.wins_x.cmp(&self.wins_o) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for TournamentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x: {}, o: {}, draws: {} ({} games)",
            self.wins_x, self.wins_o, self.draws, self.total
        )
    }
}

/// When a set of episodes ends.
pub enum StopCondition {
    /// Play exactly this many episodes.
    Games(usize),
    /// Play until the predicate returns true. Checked between episodes.
    Until(Box<dyn FnMut(&TournamentStats) -> bool>),
    /// Play until the deadline. Checked between episodes, so the last
    /// episode may overrun it.
    Deadline(Instant),
}

/// Drives episodes between two strategies.
pub struct Tournament {
    board: Board,
    strategy_x: Box<dyn Strategy>,
    strategy_o: Box<dyn Strategy>,
    trainers: Vec<Box<dyn Trainer>>,
    observers: Vec<Box<dyn Observer>>,
    stats: TournamentStats,
    rng: StdRng,
}

impl Tournament {
    pub fn new(strategy_x: Box<dyn Strategy>, strategy_o: Box<dyn Strategy>) -> Self {
        Self::with_seed(strategy_x, strategy_o, rand::random())
    }

    /// Build with a fixed tie-breaking seed for reproducible runs.
    pub fn with_seed(
        strategy_x: Box<dyn Strategy>,
        strategy_o: Box<dyn Strategy>,
        seed: u64,
    ) -> Self {
        Tournament {
            board: Board::new(),
            strategy_x,
            strategy_o,
            trainers: Vec::new(),
            observers: Vec::new(),
            stats: TournamentStats::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Register a trainer; it receives the finished board after every
    /// episode, before observers run.
    pub fn add_trainer(&mut self, trainer: Box<dyn Trainer>) {
        self.trainers.push(trainer);
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn stats(&self) -> TournamentStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = TournamentStats::default();
    }

    /// Play one episode to completion on the shared board.
    ///
    /// The board is reset first, so the previous episode's history is gone
    /// once this returns. Fails with [`Error::NoCandidateMoves`] when a
    /// strategy offers nothing for a position that still has empty cells.
    pub fn play_game(&mut self) -> Result<GameOutcome> {
        self.board.start();

        while !self.board.complete() {
            let strategy = match self.board.player() {
                Player::X => self.strategy_x.as_mut(),
                Player::O => self.strategy_o.as_mut(),
            };
            let candidates = strategy.candidates(&self.board)?;
            if candidates.is_empty() {
                return Err(Error::NoCandidateMoves);
            }

            let choice = candidates[self.rng.random_range(0..candidates.len())];
            self.board.play(choice)?;

            for observer in &mut self.observers {
                observer.on_move(&self.board)?;
            }
        }

        let outcome = match self.board.winner() {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        };
        self.stats.record(outcome);

        for trainer in &mut self.trainers {
            trainer.train(&self.board)?;
        }
        for observer in &mut self.observers {
            observer.on_game_end(self.stats.total, outcome, &self.stats)?;
        }

        Ok(outcome)
    }

    /// Play a set of episodes and return the set's leader.
    ///
    /// The leader is computed from the counter delta over this set only,
    /// `None` on a tie. Cumulative stats keep growing across sets.
    pub fn play_set(&mut self, stop: StopCondition) -> Result<Option<Player>> {
        let baseline = self.stats;
        let planned = match &stop {
            StopCondition::Games(games) => Some(*games),
            _ => None,
        };

        for observer in &mut self.observers {
            observer.on_set_start(planned)?;
        }

        match stop {
            StopCondition::Games(games) => {
                for _ in 0..games {
                    self.play_game()?;
                }
            }
            StopCondition::Until(mut done) => loop {
                self.play_game()?;
                if done(&self.stats) {
                    break;
                }
            },
            StopCondition::Deadline(deadline) => loop {
                self.play_game()?;
                if Instant::now() >= deadline {
                    break;
                }
            },
        }

        for observer in &mut self.observers {
            observer.on_set_end(&self.stats)?;
        }

        Ok(self.stats.since(&baseline).leader())
    }
}
