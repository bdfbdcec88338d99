//! Front ends for the game: a line-based console that mirrors the classic
//! text game, and a terminal UI built with Ratatui. Both map players to their
//! configured names and symbols here; the game core never sees them.

mod app;
pub mod console;
mod game_view;

pub use app::App;
pub use console::Console;

use crate::config::AppConfig;
use crate::game::{Cell, GameResult, Player};

/// Display names and marker symbols for both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    names: [String; 2],
    symbols: [char; 2],
}

impl Presentation {
    pub fn from_config(config: &AppConfig) -> Self {
        Presentation {
            names: [
                config.player_name(Player::One),
                config.player_name(Player::Two),
            ],
            symbols: [
                config.player_symbol(Player::One),
                config.player_symbol(Player::Two),
            ],
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }

    pub fn symbol(&self, player: Player) -> char {
        self.symbols[player.index()]
    }

    /// Symbol drawn for a cell; empty cells are blank
    pub fn cell_symbol(&self, cell: Cell) -> char {
        match cell.owner() {
            Some(player) => self.symbol(player),
            None => ' ',
        }
    }

    /// Text announcing a finished game. Quitting announces nothing.
    pub fn announcement(&self, result: GameResult) -> Option<String> {
        match result {
            GameResult::Win(player) => Some(format!("{} wins!", self.name(player))),
            GameResult::Draw => Some("It's a draw!".to_string()),
            GameResult::Aborted => None,
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_presentation() {
        let p = Presentation::default();
        assert_eq!(p.symbol(Player::One), 'O');
        assert_eq!(p.symbol(Player::Two), 'X');
        assert_eq!(p.cell_symbol(Cell::Empty), ' ');
        assert_eq!(p.cell_symbol(Cell::Token(Player::Two)), 'X');
    }

    #[test]
    fn test_announcements() {
        let p = Presentation::default();
        assert_eq!(
            p.announcement(GameResult::Win(Player::One)).as_deref(),
            Some("Player 1 wins!")
        );
        assert_eq!(
            p.announcement(GameResult::Draw).as_deref(),
            Some("It's a draw!")
        );
        assert_eq!(p.announcement(GameResult::Aborted), None);
    }

    #[test]
    fn test_configured_names_and_symbols() {
        let mut config = AppConfig::default();
        config.players.one.name = Some("Ada".into());
        config.players.two.symbol = Some('#');
        let p = Presentation::from_config(&config);
        assert_eq!(p.name(Player::One), "Ada");
        assert_eq!(p.symbol(Player::Two), '#');
        assert_eq!(
            p.announcement(GameResult::Win(Player::One)).as_deref(),
            Some("Ada wins!")
        );
    }
}
