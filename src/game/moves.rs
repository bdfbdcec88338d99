//! Move resolution: which user-facing column numbers are playable and where a
//! token dropped into a column comes to rest.

use super::board::{Board, Position, COLS, ROWS};
use crate::error::IllegalMove;

/// Validate a 1-indexed column number and translate it to a board index.
pub fn check_move(board: &Board, column: i64) -> Result<usize, IllegalMove> {
    if column < 1 || column > COLS as i64 {
        return Err(IllegalMove::OutOfRange { column });
    }

    let col = (column - 1) as usize;
    if board.is_column_full(col) {
        return Err(IllegalMove::ColumnFull { column });
    }
    Ok(col)
}

/// True iff the 1-indexed `column` is in range and its top cell is empty
pub fn is_legal_move(board: &Board, column: i64) -> bool {
    check_move(board, column).is_ok()
}

/// Find the landing cell for a token dropped into `col` (0-indexed).
///
/// Scans from the bottom row upward and returns the first empty cell, or
/// `None` when the column is full or out of range.
pub fn resolve_drop(board: &Board, col: usize) -> Option<Position> {
    if col >= COLS {
        return None;
    }
    (0..ROWS)
        .rev()
        .map(|row| Position::new(col, row))
        .find(|&pos| board.cell_at(pos).is_empty())
}

/// All playable 1-indexed column numbers
pub fn legal_columns(board: &Board) -> Vec<i64> {
    (1..=COLS as i64)
        .filter(|&column| is_legal_move(board, column))
        .collect()
}
