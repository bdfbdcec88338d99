//! The synchronous turn loop and the seams it talks to: something that
//! produces actions and something that shows the game.

use std::io;

use tracing::{info, warn};

use super::state::{Action, GameResult, GameState, TurnEvent};
use super::{Board, Player};
use crate::error::{GameError, InputError};

/// Produces one action per prompt.
pub trait InputSource {
    /// Block until the next action for `player` is available. An error here
    /// means the stream itself is broken, not that the input was bad.
    fn next_action(&mut self, player: Player) -> Result<Action, InputError>;
}

/// Presents the game. Rendering never mutates the board.
pub trait Renderer {
    /// Redraw the whole grid
    fn show_board(&mut self, board: &Board) -> io::Result<()>;

    /// Tell `player` their input could not be played
    fn reject(&mut self, player: Player, event: &TurnEvent) -> io::Result<()>;

    /// Present the final result
    fn announce(&mut self, result: GameResult) -> io::Result<()>;
}

/// Run `state` to completion, returning how the game ended.
///
/// Bad input re-prompts the same player. Quitting yields
/// [`GameResult::Aborted`]; a broken input stream ends the game with an error.
pub fn play<F>(state: &mut GameState, frontend: &mut F) -> Result<GameResult, GameError>
where
    F: InputSource + Renderer,
{
    info!("game started");
    frontend
        .show_board(state.board())
        .map_err(GameError::Render)?;

    loop {
        if let Some(result) = state.result() {
            info!(?result, moves = state.moves_played(), "game finished");
            frontend.announce(result).map_err(GameError::Render)?;
            return Ok(result);
        }

        let player = state.current_player();
        let action = match frontend.next_action(player) {
            Ok(action) => action,
            Err(err) => {
                warn!(%err, "input stream failed, abandoning game");
                return Err(err.into());
            }
        };

        let event = state.handle(action);
        match event {
            TurnEvent::Placed { .. } => frontend
                .show_board(state.board())
                .map_err(GameError::Render)?,
            TurnEvent::Illegal(_) | TurnEvent::Unrecognized => frontend
                .reject(player, &event)
                .map_err(GameError::Render)?,
            TurnEvent::Aborted | TurnEvent::GameOver => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::IllegalMove;

    /// Scripted front end recording everything the loop asks it to do.
    #[derive(Default)]
    struct Scripted {
        actions: VecDeque<Action>,
        prompts: Vec<Player>,
        boards: Vec<Board>,
        rejected: Vec<(Player, TurnEvent)>,
        announced: Option<GameResult>,
    }

    impl Scripted {
        fn new(actions: &[Action]) -> Self {
            Scripted {
                actions: actions.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl InputSource for Scripted {
        fn next_action(&mut self, player: Player) -> Result<Action, InputError> {
            self.prompts.push(player);
            self.actions.pop_front().ok_or(InputError::Closed)
        }
    }

    impl Renderer for Scripted {
        fn show_board(&mut self, board: &Board) -> io::Result<()> {
            self.boards.push(*board);
            Ok(())
        }

        fn reject(&mut self, player: Player, event: &TurnEvent) -> io::Result<()> {
            self.rejected.push((player, *event));
            Ok(())
        }

        fn announce(&mut self, result: GameResult) -> io::Result<()> {
            self.announced = Some(result);
            Ok(())
        }
    }

    #[test]
    fn test_vertical_win_is_announced() {
        let mut state = GameState::initial();
        let mut frontend = Scripted::new(&[
            Action::Play(4),
            Action::Play(1),
            Action::Play(4),
            Action::Play(1),
            Action::Play(4),
            Action::Play(1),
            Action::Play(4),
        ]);

        let result = play(&mut state, &mut frontend).unwrap();
        assert_eq!(result, GameResult::Win(Player::One));
        assert_eq!(frontend.announced, Some(GameResult::Win(Player::One)));
        // Initial board plus one redraw per move
        assert_eq!(frontend.boards.len(), 8);
        assert_eq!(frontend.boards[0], Board::new());
        assert_eq!(frontend.boards.last(), Some(state.board()));
    }

    #[test]
    fn test_illegal_column_reprompts_same_player() {
        let mut state = GameState::initial();
        let mut frontend = Scripted::new(&[Action::Play(9), Action::Unrecognized, Action::Quit]);

        let result = play(&mut state, &mut frontend).unwrap();
        assert_eq!(result, GameResult::Aborted);
        assert_eq!(frontend.prompts, vec![Player::One; 3]);
        assert_eq!(
            frontend.rejected,
            vec![
                (
                    Player::One,
                    TurnEvent::Illegal(IllegalMove::OutOfRange { column: 9 })
                ),
                (Player::One, TurnEvent::Unrecognized),
            ]
        );
        assert_eq!(frontend.boards, vec![Board::new()]);
        assert_eq!(*state.board(), Board::new());
    }

    #[test]
    fn test_quit_announces_aborted() {
        let mut state = GameState::initial();
        let mut frontend = Scripted::new(&[Action::Play(3), Action::Quit]);

        let result = play(&mut state, &mut frontend).unwrap();
        assert_eq!(result, GameResult::Aborted);
        assert_eq!(frontend.announced, Some(GameResult::Aborted));
        assert_eq!(frontend.prompts, vec![Player::One, Player::Two]);
    }

    #[test]
    fn test_closed_input_is_fatal() {
        let mut state = GameState::initial();
        let mut frontend = Scripted::new(&[Action::Play(3)]);

        let err = play(&mut state, &mut frontend).unwrap_err();
        assert!(matches!(err, GameError::Input(InputError::Closed)));
        assert_eq!(frontend.announced, None);
        assert_eq!(state.result(), None);
    }

    /// Front end whose output is gone; input is never reached
    struct BrokenDisplay;

    impl InputSource for BrokenDisplay {
        fn next_action(&mut self, _player: Player) -> Result<Action, InputError> {
            Ok(Action::Play(1))
        }
    }

    impl Renderer for BrokenDisplay {
        fn show_board(&mut self, _board: &Board) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn reject(&mut self, _player: Player, _event: &TurnEvent) -> io::Result<()> {
            Ok(())
        }

        fn announce(&mut self, _result: GameResult) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_failure_is_fatal() {
        let mut state = GameState::initial();

        let err = play(&mut state, &mut BrokenDisplay).unwrap_err();
        assert!(matches!(
            err,
            GameError::Render(ref e) if e.kind() == io::ErrorKind::BrokenPipe
        ));
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn test_finished_state_returns_immediately() {
        let mut state = GameState::initial();
        state.handle(Action::Quit);
        let mut frontend = Scripted::new(&[]);

        assert_eq!(play(&mut state, &mut frontend).unwrap(), GameResult::Aborted);
        assert!(frontend.prompts.is_empty());
    }
}
