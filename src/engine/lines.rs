//! Winning line detection for the 3x3 board

use super::board::{Cell, Player};

/// Winning line indices: 3 rows, 3 columns, 2 diagonals, in that order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Find the winner on the given cells, if any.
///
/// Checks the 8 fixed lines in enumeration order and returns the owner of
/// the first completed one. Only one player can hold a completed line on a
/// board reached through legal play, so the ordering carries no ambiguity.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && cells[line[1]] == first && cells[line[2]] == first {
            return first.to_player();
        }
    }
    None
}
