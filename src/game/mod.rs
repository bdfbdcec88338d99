//! Core Connect Four game logic: board representation, move resolution,
//! win/draw detection and the turn controller.

mod board;
pub mod detector;
pub mod moves;
mod player;
pub mod session;
mod state;

pub use board::{valid_position, Board, Cell, Position, COLS, ROWS};
pub use detector::{GameStatus, WIN_LENGTH};
pub use player::Player;
pub use session::{play, InputSource, Renderer};
pub use state::{Action, GameOutcome, GameResult, GameState, Phase, TurnEvent};
