use super::moves;
use super::player::Player;
use crate::error::IllegalMove;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Token(Player),
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Token(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A cell coordinate. Column 0 is the leftmost column, row 0 the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Position { column, row }
    }

    /// Step `steps` times along `(dc, dr)`. Returns `None` as soon as the
    /// probe would leave the grid.
    pub fn offset(self, dc: isize, dr: isize, steps: isize) -> Option<Position> {
        let column = self.column as isize + dc * steps;
        let row = self.row as isize + dr * steps;
        if valid_position(column, row) {
            Some(Position::new(column as usize, row as usize))
        } else {
            None
        }
    }
}

/// Check if a signed coordinate lies inside the grid
pub fn valid_position(column: isize, row: isize) -> bool {
    (0..COLS as isize).contains(&column) && (0..ROWS as isize).contains(&row)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Empty every cell for a fresh game
    pub fn initialize(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a position.
    ///
    /// Panics if the position is outside the grid; probes that may leave the
    /// grid go through [`Position::offset`] first.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.column]
    }

    /// Check if a column (0-indexed) has no empty cell left
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a token into a column (0-indexed), returns the cell where it landed
    pub fn place(&mut self, col: usize, player: Player) -> Result<Position, IllegalMove> {
        if col >= COLS {
            return Err(IllegalMove::OutOfRange {
                column: col as i64 + 1,
            });
        }

        let pos = moves::resolve_drop(self, col).ok_or(IllegalMove::ColumnFull {
            column: col as i64 + 1,
        })?;
        self.cells[pos.row][pos.column] = player.to_cell();
        Ok(pos)
    }

    /// Rows of the board from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; COLS]> {
        self.cells.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
