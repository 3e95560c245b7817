//! Board state, move application, and undo

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::lines;
use crate::{Error, Result};

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub(crate) fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Outcome of a completed episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// One entry of the per-episode training history: the move that was played
/// and a snapshot of the board immediately after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
    pub state: [Cell; 9],
}

/// The live game board.
///
/// A `Board` is constructed once and reused across many episodes via
/// [`start`](Board::start), which resets every field without reallocating
/// the history vectors' capacity. Moves are applied in place and can be
/// reversed one at a time with [`undo`](Board::undo); the minimax search
/// relies on this to walk the game tree without copying states.
///
/// Invariants maintained by every operation:
/// - `cells_left + move_history.len() == 9`
/// - the player to move is X iff `cells_left` is odd (X always opens)
/// - `winner` is set exactly while a completed line exists on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    state: [Cell; 9],
    cells_left: usize,
    winner: Option<Player>,
    move_history: Vec<usize>,
    state_history: Vec<HistoryEntry>,
}

impl Board {
    /// Create a new empty board with X to move.
    pub fn new() -> Self {
        Board {
            state: [Cell::Empty; 9],
            cells_left: 9,
            winner: None,
            move_history: Vec::new(),
            state_history: Vec::new(),
        }
    }

    /// Reset to the empty board: no winner, full cell budget, cleared
    /// histories. Never fails.
    pub fn start(&mut self) {
        self.state = [Cell::Empty; 9];
        self.cells_left = 9;
        self.winner = None;
        self.move_history.clear();
        self.state_history.clear();
    }

    /// The player whose turn it is. Derived from parity: X moves on odd
    /// `cells_left`, O on even.
    pub fn player(&self) -> Player {
        if self.cells_left % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// True once the board is full or a winner exists.
    pub fn complete(&self) -> bool {
        self.cells_left == 0 || self.winner.is_some()
    }

    /// The winning player, if the episode produced one.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The episode outcome, or `None` while the episode is still running.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.complete() {
            return None;
        }
        Some(match self.winner {
            Some(player) => GameOutcome::Win(player),
            None => GameOutcome::Draw,
        })
    }

    /// Number of empty cells remaining.
    pub fn cells_left(&self) -> usize {
        self.cells_left
    }

    /// Applied move indices, oldest first.
    pub fn move_history(&self) -> &[usize] {
        &self.move_history
    }

    /// Per-move board snapshots, parallel to [`move_history`](Board::move_history).
    /// This is the training signal handed to trainers after an episode.
    pub fn state_history(&self) -> &[HistoryEntry] {
        &self.state_history
    }

    /// A copy of the current 9-cell state. The copy does not track further
    /// board mutation.
    pub fn state(&self) -> [Cell; 9] {
        self.state
    }

    /// True iff the cell is not empty.
    pub fn busy(&self, index: usize) -> bool {
        self.state[index] != Cell::Empty
    }

    /// All empty positions, in index order.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.state
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply `index` as the current player's move.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidIndex`] if `index > 8`
    /// - [`Error::CellOccupied`] if the target cell is taken
    ///
    /// Both checks run before the completion check, so an invalid call still
    /// fails on a finished board. A *valid* move on a complete board is
    /// silently ignored; the episode froze at its terminal state.
    pub fn play(&mut self, index: usize) -> Result<()> {
        if index > 8 {
            return Err(Error::InvalidIndex { index });
        }
        if self.state[index] != Cell::Empty {
            return Err(Error::CellOccupied { index });
        }
        if self.complete() {
            return Ok(());
        }

        self.state[index] = self.player().to_cell();
        self.move_history.push(index);
        self.state_history.push(HistoryEntry {
            position: index,
            state: self.state,
        });
        self.cells_left -= 1;
        self.winner = lines::winner(&self.state);
        Ok(())
    }

    /// Reverse the last applied move. No-op when the history is empty.
    ///
    /// The winner is cleared unconditionally: a set winner freezes the board
    /// against further moves, so the popped move is always the winning one.
    pub fn undo(&mut self) {
        let Some(index) = self.move_history.pop() else {
            return;
        };
        self.state_history.pop();
        self.state[index] = Cell::Empty;
        self.cells_left += 1;
        self.winner = None;
    }

    /// A uniformly random empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCandidateMoves`] when the board has no empty cell;
    /// callers normally check [`complete`](Board::complete) first.
    pub fn random_move<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        let empty = self.empty_positions();
        if empty.is_empty() {
            return Err(Error::NoCandidateMoves);
        }
        Ok(empty[rng.random_range(0..empty.len())])
    }

    /// All moves tied for the game-theoretic optimum for the side to move.
    ///
    /// Runs the exhaustive negamax search in [`search`](super::search) over
    /// this board via `play`/`undo`; the board is restored before returning.
    /// The `&mut` borrow makes the search's non-reentrancy explicit: no
    /// other mutation may interleave with the call.
    pub fn minimax(&mut self) -> Vec<usize> {
        super::search::tied_best_moves(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let begin = row * 3;
            writeln!(
                f,
                " {} | {} | {} ",
                self.state[begin].to_char(),
                self.state[begin + 1].to_char(),
                self.state[begin + 2].to_char()
            )?;
            if row < 2 {
                writeln!(f, "-----------")?;
            }
        }
        Ok(())
    }
}
