//! Win/draw detection by counting runs through the most recently placed token.

use super::board::{Board, Position};
use super::player::Player;

/// Tokens in a row needed to win
pub const WIN_LENGTH: usize = 4;

/// One direction per axis; the opposite direction is the negation.
/// Rows grow downward, so `(0, 1)` points toward the floor.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // vertical
    (1, 0),  // horizontal
    (1, 1),  // diagonal
    (1, -1), // anti-diagonal
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Win(Player),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Count consecutive `player` tokens starting at `origin` and walking along
/// `(dc, dr)`. The origin itself always counts as one.
fn count_from(board: &Board, origin: Position, (dc, dr): (isize, isize), player: Player) -> usize {
    let mut count = 1;
    while let Some(pos) = origin.offset(dc, dr, count as isize) {
        if board.cell_at(pos).owner() != Some(player) {
            break;
        }
        count += 1;
    }
    count
}

/// Length of the run through `origin` along one axis, counting both directions
fn run_length(board: &Board, origin: Position, (dc, dr): (isize, isize), player: Player) -> usize {
    count_from(board, origin, (dc, dr), player) + count_from(board, origin, (-dc, -dr), player) - 1
}

/// Longest run of `player` tokens through `origin` over all four axes
pub fn longest_run(board: &Board, origin: Position, player: Player) -> usize {
    AXES.iter()
        .map(|&axis| run_length(board, origin, axis, player))
        .max()
        .unwrap_or(1)
}

/// Status of the game after `player` placed a token at `last`.
///
/// A move that completes a run and fills the board is a win.
pub fn game_status(board: &Board, last: Position, player: Player) -> GameStatus {
    if longest_run(board, last, player) >= WIN_LENGTH {
        GameStatus::Win(player)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::Ongoing
    }
}
