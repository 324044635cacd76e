use connect_four::error::MoveError;
use connect_four::game::{Board, Cell, GameController};
use proptest::prelude::*;

fn assert_no_floating_pieces(board: &Board) {
    for col in 0..board.width() {
        for row in 0..board.height() - 1 {
            if board.get(row, col) != Some(Cell::Empty) {
                assert_ne!(
                    board.get(row + 1, col),
                    Some(Cell::Empty),
                    "piece at ({row}, {col}) is floating"
                );
            }
        }
    }
}

proptest! {
    #[test]
    fn gravity_holds_after_any_move_sequence(
        width in 1usize..9,
        height in 1usize..8,
        moves in proptest::collection::vec(0usize..10, 0..80),
    ) {
        let mut game = GameController::new(width, height).unwrap();
        for col in moves {
            let before = game.clone();
            match game.apply_move(col) {
                Ok(report) => {
                    prop_assert!(report.column == col);
                    prop_assert!(before.board().get(report.row, col) == Some(Cell::Empty));
                }
                Err(MoveError::InvalidColumn { .. }) => prop_assert!(col >= width),
                Err(_) => prop_assert_eq!(&game, &before),
            }
            assert_no_floating_pieces(game.board());
        }
    }

    #[test]
    fn empty_column_drops_to_bottom(width in 1usize..20, height in 1usize..20) {
        let board = Board::new(width, height).unwrap();
        for col in 0..width {
            prop_assert_eq!(board.find_drop_row(col), Ok(Some(height - 1)));
        }
    }

    #[test]
    fn occupied_cells_never_change(moves in proptest::collection::vec(0usize..7, 1..60)) {
        let mut game = GameController::standard();
        for col in moves {
            let before = game.board().clone();
            let _ = game.apply_move(col);
            for row in 0..before.height() {
                for c in 0..before.width() {
                    if before.get(row, c) != Some(Cell::Empty) {
                        prop_assert_eq!(before.get(row, c), game.board().get(row, c));
                    }
                }
            }
        }
    }
}
