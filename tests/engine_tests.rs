//! Engine-level properties: episode completion, search optimality

use selfplay::engine::{Board, Player};

fn play_all(board: &mut Board, order: [usize; 9]) {
    for pos in order {
        board.play(pos).unwrap();
    }
}

#[test]
fn any_full_move_order_completes_the_episode() {
    let orders = [
        [0, 1, 2, 3, 4, 5, 6, 7, 8],
        [8, 7, 6, 5, 4, 3, 2, 1, 0],
        [4, 0, 8, 2, 6, 1, 7, 3, 5],
        [1, 4, 7, 0, 3, 6, 2, 5, 8],
    ];

    for order in orders {
        let mut board = Board::new();
        play_all(&mut board, order);

        assert!(board.complete());
        // Either the board filled up, or a winner froze it early and the
        // remaining moves were ignored.
        assert!(board.cells_left() == 0 || board.winner().is_some());
        assert_eq!(board.cells_left() + board.move_history().len(), 9);
    }
}

#[test]
fn undo_rewinds_a_full_episode_to_the_start() {
    let mut board = Board::new();
    play_all(&mut board, [0, 1, 2, 3, 4, 5, 6, 7, 8]);

    for _ in 0..9 {
        board.undo();
    }
    assert_eq!(board, Board::new());
}

#[test]
fn empty_board_has_candidates_and_x_to_move() {
    let mut board = Board::new();
    assert_eq!(board.player(), Player::X);
    assert!(!board.minimax().is_empty());
}

/// Walk the game tree restricted to tied-best moves for both sides and
/// check that every reachable terminal is a draw. This is the exhaustive
/// form of "optimal play never loses": if any line through the optimal
/// move sets ended in a win, one side's search would have mis-scored it.
#[test]
fn every_line_of_optimal_play_is_a_draw() {
    fn walk(board: &mut Board, terminals: &mut u64) {
        if board.complete() {
            assert_eq!(
                board.winner(),
                None,
                "optimal play reached a decided game:\n{board}"
            );
            *terminals += 1;
            return;
        }

        for index in board.minimax() {
            board.play(index).unwrap();
            walk(board, terminals);
            board.undo();
        }
    }

    let mut board = Board::new();
    let mut terminals = 0;
    walk(&mut board, &mut terminals);
    assert!(terminals > 0);
}
