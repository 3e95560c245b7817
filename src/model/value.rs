//! State-indexed value table
//!
//! Each board state maps to a 9-wide row of cell values. Prediction reads
//! the row for the position a player faces and returns every empty cell
//! within a small tolerance of the best value; training replays a finished
//! episode and nudges the value of each played cell toward the episode's
//! reward. Unseen states read as the neutral initial value, so a fresh
//! model plays uniformly at random through the driver's tie-breaking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    engine::{Board, Cell, Player},
};

pub const DEFAULT_LEARNING_RATE: f64 = 0.25;

const INITIAL_VALUE: f64 = 0.5;
const TIE_EPSILON: f64 = 1e-6;

fn state_key(state: &[Cell; 9]) -> String {
    state
        .iter()
        .map(|cell| match cell {
            Cell::Empty => '-',
            Cell::X => 'x',
            Cell::O => 'o',
        })
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueModel {
    values: HashMap<String, [f64; 9]>,
    learning_rate: f64,
    games_trained: u64,
}

impl ValueModel {
    pub fn new() -> Self {
        Self::with_learning_rate(DEFAULT_LEARNING_RATE)
    }

    pub fn with_learning_rate(learning_rate: f64) -> Self {
        ValueModel {
            values: HashMap::new(),
            learning_rate,
            games_trained: 0,
        }
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn games_trained(&self) -> u64 {
        self.games_trained
    }

    /// Number of distinct states with learned rows.
    pub fn states_seen(&self) -> usize {
        self.values.len()
    }

    fn row(&self, key: &str) -> [f64; 9] {
        self.values
            .get(key)
            .copied()
            .unwrap_or([INITIAL_VALUE; 9])
    }

    /// All empty cells whose value ties the best for the side to move.
    ///
    /// X prefers high values, O low. Ties are any value within `1e-6` of
    /// the best; the tournament driver breaks them uniformly.
    ///
    /// # Errors
    ///
    /// [`Error::NoCandidateMoves`] when the board has no empty cell.
    pub fn predict(&self, board: &Board) -> Result<Vec<usize>> {
        let row = self.row(&state_key(&board.state()));
        let maximize = board.player() == Player::X;

        let mut best: Option<f64> = None;
        let mut candidates = Vec::new();

        for index in 0..9 {
            if board.busy(index) {
                continue;
            }
            let value = row[index];
            match best {
                None => {
                    best = Some(value);
                    candidates.push(index);
                }
                Some(current) => {
                    let delta = if maximize {
                        value - current
                    } else {
                        current - value
                    };
                    if delta > TIE_EPSILON {
                        best = Some(value);
                        candidates.clear();
                        candidates.push(index);
                    } else if delta.abs() < TIE_EPSILON {
                        candidates.push(index);
                    }
                }
            }
        }

        if candidates.is_empty() {
            return Err(Error::NoCandidateMoves);
        }
        Ok(candidates)
    }

    /// Learn from a finished episode.
    ///
    /// Reward schedule: X win `+1.0`, O win `-1.0`, draw `+0.5`. For every
    /// history entry the row of the state the mover actually faced is
    /// updated at the played cell, moving it toward the reward at the
    /// learning rate.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteEpisode`] when the board is still in progress.
    pub fn train(&mut self, board: &Board) -> Result<()> {
        if !board.complete() {
            return Err(Error::IncompleteEpisode);
        }

        let reward = match board.winner() {
            Some(Player::X) => 1.0,
            Some(Player::O) => -1.0,
            None => 0.5,
        };

        for entry in board.state_history() {
            // The history snapshots the state after each move; clearing the
            // played cell recovers the state the decision was made in.
            let mut before = entry.state;
            before[entry.position] = Cell::Empty;

            let row = self
                .values
                .entry(state_key(&before))
                .or_insert([INITIAL_VALUE; 9]);
            let value = row[entry.position];
            row[entry.position] = value + self.learning_rate * (reward - value);
        }

        self.games_trained += 1;
        Ok(())
    }
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_by_x() -> Board {
        let mut board = Board::new();
        for pos in [0, 4, 1, 5, 2] {
            board.play(pos).unwrap();
        }
        board
    }

    #[test]
    fn test_train_rejects_incomplete_episode() {
        let mut model = ValueModel::new();
        let mut board = Board::new();
        board.play(0).unwrap();

        assert!(matches!(
            model.train(&board),
            Err(Error::IncompleteEpisode)
        ));
        assert_eq!(model.games_trained(), 0);
    }

    #[test]
    fn test_fresh_model_predicts_all_empty_cells() {
        let model = ValueModel::new();
        let mut board = Board::new();
        board.play(4).unwrap();

        let candidates = model.predict(&board).unwrap();
        assert_eq!(candidates, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_predict_on_full_board_fails() {
        let model = ValueModel::new();
        let mut board = Board::new();
        for pos in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            board.play(pos).unwrap();
        }
        assert!(matches!(
            model.predict(&board),
            Err(Error::NoCandidateMoves)
        ));
    }

    #[test]
    fn test_x_win_raises_opening_move_value() {
        let mut model = ValueModel::with_learning_rate(0.5);
        model.train(&won_by_x()).unwrap();

        assert_eq!(model.games_trained(), 1);
        assert_eq!(model.states_seen(), 5);

        // X opened at 0; on the empty board that cell is now the unique best.
        let fresh = Board::new();
        assert_eq!(model.predict(&fresh).unwrap(), vec![0]);
    }

    #[test]
    fn test_o_minimizes_after_an_o_win() {
        let mut model = ValueModel::with_learning_rate(0.5);

        // O wins the middle row: x at 0, 1, 8; o at 3, 4, 5.
        let mut board = Board::new();
        for pos in [0, 3, 1, 4, 8, 5] {
            board.play(pos).unwrap();
        }
        model.train(&board).unwrap();

        // With only x's opening move on the board, o's first recorded reply
        // now carries the lowest value and o prefers it.
        let mut replay = Board::new();
        replay.play(0).unwrap();
        assert_eq!(model.predict(&replay).unwrap(), vec![3]);
    }

    #[test]
    fn test_repeated_training_converges_toward_reward() {
        let mut model = ValueModel::with_learning_rate(0.5);
        for _ in 0..20 {
            model.train(&won_by_x()).unwrap();
        }
        assert_eq!(model.games_trained(), 20);

        let fresh = Board::new();
        assert_eq!(model.predict(&fresh).unwrap(), vec![0]);
    }
}
