//! Exhaustive negamax search over the live board
//!
//! The search walks the full game tree by mutating the board through
//! `play` and restoring it with `undo`, so no tree nodes are allocated.
//! Scores are always relative to the side to move: +1 a forced win,
//! -1 a forced loss, 0 a draw. Parents negate child scores.

use super::board::Board;

struct Evaluation {
    score: i32,
    moves: Vec<usize>,
}

/// All moves tied for the best achievable score for the side to move.
///
/// Returns an empty set on a complete board. The board is left exactly as
/// it was passed in.
pub fn tied_best_moves(board: &mut Board) -> Vec<usize> {
    evaluate(board).moves
}

fn evaluate(board: &mut Board) -> Evaluation {
    if board.complete() {
        let score = match board.winner() {
            None => 0,
            Some(winner) if winner == board.player() => 1,
            Some(_) => -1,
        };
        return Evaluation {
            score,
            moves: Vec::new(),
        };
    }

    let mut best = Evaluation {
        score: i32::MIN,
        moves: Vec::new(),
    };

    for index in 0..9 {
        if board.busy(index) {
            continue;
        }

        board.play(index).expect("empty cell is playable");
        let score = -evaluate(board).score;
        board.undo();

        if score > best.score {
            best.score = score;
            best.moves = vec![index];
        } else if score == best.score {
            best.moves.push(index);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_opening_move_is_optimal() {
        let mut board = Board::new();
        let moves = tied_best_moves(&mut board);
        assert_eq!(moves, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_restores_the_board() {
        let mut board = Board::new();
        board.play(4).unwrap();
        board.play(0).unwrap();
        let before = board.clone();

        tied_best_moves(&mut board);
        assert_eq!(board, before);
    }

    #[test]
    fn test_forced_win_is_singleton() {
        // X holds 0 and 1 with the top row open; completing it is the only
        // optimal move.
        let mut board = Board::new();
        for pos in [0, 3, 1, 4] {
            board.play(pos).unwrap();
        }
        assert_eq!(tied_best_moves(&mut board), vec![2]);
    }

    #[test]
    fn test_forced_block_at_center_is_singleton() {
        // X threatens the middle column; any O move other than the center
        // block loses immediately.
        let mut board = Board::new();
        for pos in [1, 0, 7] {
            board.play(pos).unwrap();
        }
        assert_eq!(tied_best_moves(&mut board), vec![4]);
    }

    #[test]
    fn test_complete_board_has_no_moves() {
        let mut board = Board::new();
        for pos in [0, 4, 1, 5, 2] {
            board.play(pos).unwrap();
        }
        assert!(tied_best_moves(&mut board).is_empty());
    }
}
