use tracing::debug;

use super::detector::{self, GameStatus};
use super::{moves, Board, Player, Position};
use crate::error::IllegalMove;

/// What the input side handed us for the current prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A 1-indexed column number, not yet validated
    Play(i64),
    Quit,
    /// Input that is neither a number nor a quit request
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Where the turn loop stands. Evaluation happens inside [`GameState::handle`]
/// and never outlives a single call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Finished(GameOutcome),
    Aborted,
}

/// Final result handed to whoever announces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Player),
    Draw,
    Aborted,
}

/// Result of feeding one [`Action`] to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    Placed {
        player: Player,
        position: Position,
        status: GameStatus,
    },
    Illegal(IllegalMove),
    Unrecognized,
    Aborted,
    /// The game already ended; nothing changed
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    phase: Phase,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One,
            phase: Phase::AwaitingInput,
            moves_played: 0,
        }
    }

    /// Start a new game on the same state
    pub fn reset(&mut self) {
        self.board.initialize();
        self.current_player = Player::One;
        self.phase = Phase::AwaitingInput;
        self.moves_played = 0;
        debug!("board reset for a new game");
    }

    /// Player whose move is awaited (or who made the last move once finished)
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Check if game is over, by result or by quitting
    pub fn is_terminal(&self) -> bool {
        self.phase != Phase::AwaitingInput
    }

    /// Final result, if the game has ended
    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::AwaitingInput => None,
            Phase::Finished(GameOutcome::Winner(player)) => Some(GameResult::Win(player)),
            Phase::Finished(GameOutcome::Draw) => Some(GameResult::Draw),
            Phase::Aborted => Some(GameResult::Aborted),
        }
    }

    /// Get list of playable 1-indexed columns
    pub fn legal_columns(&self) -> Vec<i64> {
        if self.is_terminal() {
            return Vec::new();
        }
        moves::legal_columns(&self.board)
    }

    /// Advance the turn loop by one input.
    pub fn handle(&mut self, action: Action) -> TurnEvent {
        if self.is_terminal() {
            return TurnEvent::GameOver;
        }

        let column = match action {
            Action::Quit => {
                debug!(player = self.current_player.number(), "quit requested");
                self.phase = Phase::Aborted;
                return TurnEvent::Aborted;
            }
            Action::Unrecognized => return TurnEvent::Unrecognized,
            Action::Play(column) => column,
        };

        let col = match moves::check_move(&self.board, column) {
            Ok(col) => col,
            Err(reason) => {
                debug!(player = self.current_player.number(), %reason, "illegal move");
                return TurnEvent::Illegal(reason);
            }
        };
        let player = self.current_player;
        let position = match self.board.place(col, player) {
            Ok(position) => position,
            Err(reason) => return TurnEvent::Illegal(reason),
        };
        self.moves_played += 1;

        let status = detector::game_status(&self.board, position, player);
        debug!(
            player = player.number(),
            column,
            row = position.row,
            ?status,
            "token placed"
        );

        match status {
            GameStatus::Ongoing => self.current_player = player.other(),
            GameStatus::Win(winner) => self.phase = Phase::Finished(GameOutcome::Winner(winner)),
            GameStatus::Draw => self.phase = Phase::Finished(GameOutcome::Draw),
        }

        TurnEvent::Placed {
            player,
            position,
            status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
