//! Tic-tac-toe game engine: board state, win detection, exhaustive search

pub mod board;
pub mod lines;
pub mod search;

pub use board::{Board, Cell, GameOutcome, HistoryEntry, Player};
