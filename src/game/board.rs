use std::fmt;

use super::Player;
use crate::error::{BoardError, MoveError, PlaceError};

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
/// Largest accepted board side.
pub const MAX_DIMENSION: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Grid of cells indexed by `(row, column)`. Row 0 is the top, row
/// `height - 1` is the bottom where pieces land first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the given size
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Create the standard 7x6 board
    pub fn standard() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::Empty; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }

    /// A fresh empty board with the same dimensions
    pub fn cleared(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.width * self.height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a position, or `None` if it lies outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    fn check_column(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Find the row a piece dropped into `col` would land on, scanning from the
    /// bottom up. `Ok(None)` means the column is full.
    pub fn find_drop_row(&self, col: usize) -> Result<Option<usize>, MoveError> {
        self.check_column(col)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_empty()))
    }

    /// Mark `(row, col)` as occupied by `player`. The cell must be the lowest
    /// empty cell of its column.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> Result<(), PlaceError> {
        let cell = self
            .get(row, col)
            .ok_or(PlaceError::OutOfBounds { row, column: col })?;
        if !cell.is_empty() {
            return Err(PlaceError::Occupied { row, column: col });
        }
        // Any empty cell below this one would leave the piece floating.
        if (row + 1..self.height).any(|r| self.cells[r * self.width + col].is_empty()) {
            return Err(PlaceError::Floating { row, column: col });
        }

        self.cells[row * self.width + col] = Cell::Occupied(player);
        Ok(())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        let row = self
            .find_drop_row(col)?
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.place(row, col, player)?;
        Ok(row)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        match self.get(0, col) {
            Some(cell) => !cell.is_empty(),
            None => true,
        }
    }

    /// Columns that can still take a piece, left to right
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Build a board from text rows (`.`, `1`, `2`), top row first. Gravity is
    /// not enforced.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| match ch {
                '1' => Cell::Occupied(Player::One),
                '2' => Cell::Occupied(Player::Two),
                _ => Cell::Empty,
            })
            .collect();
        Board {
            width,
            height,
            cells,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: Vec<&str> = self.cells[row * self.width..(row + 1) * self.width]
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Occupied(Player::One) => "1",
                    Cell::Occupied(Player::Two) => "2",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::standard();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..DEFAULT_HEIGHT {
            for col in 0..DEFAULT_WIDTH {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 6),
            Err(BoardError::InvalidDimensions { width: 0, height: 6 })
        );
        assert!(Board::new(7, 0).is_err());
        assert!(Board::new(1, 1).is_ok());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(BoardError::InvalidDimensions {
                width: usize::MAX,
                height: 2,
            })
        );
        assert!(Board::new(7, MAX_DIMENSION + 1).is_err());
        assert!(Board::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
    }

    #[test]
    fn test_find_drop_row_empty_and_full() {
        let mut board = Board::new(4, 3).unwrap();
        assert_eq!(board.find_drop_row(2), Ok(Some(2)));

        for _ in 0..3 {
            board.drop_piece(2, Player::One).unwrap();
        }
        assert_eq!(board.find_drop_row(2), Ok(None));
        assert!(board.is_column_full(2));
    }

    #[test]
    fn test_find_drop_row_invalid_column() {
        let board = Board::standard();
        assert_eq!(
            board.find_drop_row(7),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::standard();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::One)));

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Some(Cell::Occupied(Player::Two)));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::standard();
        for _ in 0..DEFAULT_HEIGHT {
            board.drop_piece(0, Player::One).unwrap();
        }
        assert_eq!(
            board.drop_piece(0, Player::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board.legal_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_place_rejects_occupied_and_floating() {
        let mut board = Board::standard();
        assert_eq!(
            board.place(2, 0, Player::One),
            Err(PlaceError::Floating { row: 2, column: 0 })
        );

        board.place(5, 0, Player::One).unwrap();
        assert_eq!(
            board.place(5, 0, Player::Two),
            Err(PlaceError::Occupied { row: 5, column: 0 })
        );
        assert_eq!(
            board.place(6, 0, Player::Two),
            Err(PlaceError::OutOfBounds { row: 6, column: 0 })
        );
        assert_eq!(board.get(5, 0), Some(Cell::Occupied(Player::One)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::standard();
        assert!(!board.is_full());
        for col in 0..DEFAULT_WIDTH {
            for _ in 0..DEFAULT_HEIGHT {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.legal_columns().is_empty());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 2).unwrap();
        board.drop_piece(0, Player::One).unwrap();
        board.drop_piece(0, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();
        assert_eq!(board.to_string(), "2 . .\n1 . 1\n");
    }
}
