//! Built-in strategies and the shared-model trainer
//!
//! [`ModelStrategy`] and [`ModelTrainer`] hold the same
//! `Arc<Mutex<ValueModel>>`, so both seats of a self-play tournament and
//! the trainer can learn through one model.

use std::sync::{Arc, Mutex};

use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    engine::Board,
    model::ValueModel,
    ports::{Strategy, Trainer},
};

/// Plays a uniformly random empty cell.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn candidates(&mut self, board: &Board) -> Result<Vec<usize>> {
        Ok(vec![board.random_move(&mut self.rng)?])
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

/// Plays game-theoretically optimal moves via exhaustive search.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &str {
        "minimax"
    }

    fn candidates(&mut self, board: &Board) -> Result<Vec<usize>> {
        // The search mutates the board it walks; run it on a scratch copy.
        let mut scratch = board.clone();
        Ok(scratch.minimax())
    }
}

/// Plays the value model's tied-best predictions.
pub struct ModelStrategy {
    model: Arc<Mutex<ValueModel>>,
    name: String,
}

impl ModelStrategy {
    pub fn new(model: Arc<Mutex<ValueModel>>) -> Self {
        Self::named(model, "model")
    }

    pub fn named(model: Arc<Mutex<ValueModel>>, name: impl Into<String>) -> Self {
        ModelStrategy {
            model,
            name: name.into(),
        }
    }
}

impl Strategy for ModelStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn candidates(&mut self, board: &Board) -> Result<Vec<usize>> {
        let model = self.model.lock().expect("model mutex poisoned");
        model.predict(board)
    }
}

/// Feeds finished episodes into a shared value model.
pub struct ModelTrainer {
    model: Arc<Mutex<ValueModel>>,
}

impl ModelTrainer {
    pub fn new(model: Arc<Mutex<ValueModel>>) -> Self {
        ModelTrainer { model }
    }
}

impl Trainer for ModelTrainer {
    fn train(&mut self, board: &Board) -> Result<()> {
        let mut model = self.model.lock().expect("model mutex poisoned");
        model.train(board)
    }
}
