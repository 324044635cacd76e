use tracing::{debug, info, instrument, warn};

use super::win::{self, Line};
use super::{Board, Player};
use crate::error::{BoardError, MoveError};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    /// The outcome, if this status is terminal
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Win(player)),
            GameStatus::Tied => Some(Outcome::Tie),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// Turn state machine. Sole owner and mutator of its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameController {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameController {
    /// Start a game on an empty `width` x `height` board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    /// Start a game on the standard 7x6 board
    pub fn standard() -> Self {
        Self::with_board(Board::standard())
    }

    fn with_board(board: Board) -> Self {
        GameController {
            board,
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is. After a terminal move this is still the
    /// player who made it.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of legal columns (empty once the game is over)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// The four cells that won the game, if it was won
    pub fn winning_line(&self) -> Option<Line> {
        match self.status {
            GameStatus::Won(player) => win::winning_line(&self.board, player),
            _ => None,
        }
    }

    /// Drop the current player's piece into `column`. A rejected move leaves
    /// the game untouched.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn apply_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            warn!("move rejected: game already over");
            return Err(MoveError::GameAlreadyOver);
        }

        let row = match self.board.find_drop_row(column) {
            Ok(Some(row)) => row,
            Ok(None) => {
                warn!("move rejected: column full");
                return Err(MoveError::ColumnFull { column });
            }
            Err(err) => {
                warn!(%err, "move rejected");
                return Err(err);
            }
        };

        let player = self.current_player;
        self.board.place(row, column, player)?;
        debug!(row, column, "piece placed");

        if win::check_win(&self.board, player) {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Tied;
        } else {
            self.current_player = player.other();
        }

        let outcome = self.status.outcome();
        if let Some(outcome) = outcome {
            info!(?outcome, "game over");
        }

        Ok(MoveReport {
            row,
            column,
            player,
            outcome,
        })
    }

    /// Discard all state and start over on an empty board of the same size
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::with_board(self.board.cleared());
        info!("game restarted");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = GameController::standard();
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_terminal());
        assert_eq!(game.legal_columns().len(), 7);
    }

    #[test]
    fn test_new_rejects_bad_dimensions() {
        assert_eq!(
            GameController::new(usize::MAX, usize::MAX),
            Err(BoardError::InvalidDimensions {
                width: usize::MAX,
                height: usize::MAX,
            })
        );
        assert!(GameController::new(0, 6).is_err());
    }

    #[test]
    fn test_apply_move() {
        let mut game = GameController::standard();
        let report = game.apply_move(3).unwrap();

        assert_eq!(
            report,
            MoveReport {
                row: 5,
                column: 3,
                player: Player::One,
                outcome: None,
            }
        );
        assert_eq!(game.current_player(), Player::Two);
        assert_eq!(game.board().get(5, 3), Some(Cell::Occupied(Player::One)));
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = GameController::standard();
        game.apply_move(0).unwrap();
        assert_eq!(game.current_player(), Player::Two);
        game.apply_move(0).unwrap();
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut game = GameController::new(2, 2).unwrap();
        game.apply_move(0).unwrap();
        game.apply_move(0).unwrap();
        let before = game.clone();

        assert_eq!(
            game.apply_move(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(
            game.apply_move(2),
            Err(MoveError::InvalidColumn { column: 2, width: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_horizontal_win_keeps_current_player() {
        let mut game = GameController::standard();

        // One plays the bottom row, Two stacks on top
        for col in 0..3 {
            game.apply_move(col).unwrap();
            game.apply_move(col).unwrap();
        }
        let report = game.apply_move(3).unwrap();

        assert_eq!(report.outcome, Some(Outcome::Win(Player::One)));
        assert_eq!(game.status(), GameStatus::Won(Player::One));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(
            game.winning_line(),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
        assert!(game.legal_columns().is_empty());
        assert_eq!(game.apply_move(4), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_tie_on_small_board() {
        // 3x3 cannot hold four in a row, so filling it always ties
        let mut game = GameController::new(3, 3).unwrap();
        let mut last = None;
        for col in [0, 1, 2, 0, 1, 2, 0, 1, 2] {
            last = game.apply_move(col).unwrap().outcome;
        }
        assert_eq!(last, Some(Outcome::Tie));
        assert_eq!(game.status(), GameStatus::Tied);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.apply_move(0), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = GameController::new(5, 4).unwrap();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.apply_move(col).unwrap();
        }
        assert!(game.is_terminal());

        game.restart();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.board(), &Board::new(5, 4).unwrap());
    }
}
