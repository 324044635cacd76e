//! Four-in-a-row detection.
//!
//! Every cell is tried as the origin of four candidate lines (one per
//! [`Direction`]). A line wins when all of its cells are on the board and
//! held by the same player. Lines that would leave the board are discarded,
//! never wrapped or clamped.

use super::{Board, Cell, Player};

/// Number of consecutive pieces needed to win.
pub const LINE_LENGTH: usize = 4;

/// `(row, column)` coordinates of a winning line, starting at its origin.
pub type Line = [(usize, usize); LINE_LENGTH];

/// Direction a line extends from its origin. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row, column)` step between consecutive cells
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Coordinates of the line anchored at `(row, col)`, or `None` if any cell
/// falls outside the board.
fn candidate_line(board: &Board, row: usize, col: usize, direction: Direction) -> Option<Line> {
    let (dy, dx) = direction.step();
    let mut line = [(0, 0); LINE_LENGTH];
    for (i, slot) in line.iter_mut().enumerate() {
        let r = row.checked_add_signed(dy * i as isize)?;
        let c = col.checked_add_signed(dx * i as isize)?;
        if r >= board.height() || c >= board.width() {
            return None;
        }
        *slot = (r, c);
    }
    Some(line)
}

/// First line (in row-major origin order) held entirely by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let target = Some(Cell::Occupied(player));
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                let Some(line) = candidate_line(board, row, col, direction) else {
                    continue;
                };
                if line.iter().all(|&(r, c)| board.get(r, c) == target) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Check whether `player` has four in a row anywhere on the board
pub fn check_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}
