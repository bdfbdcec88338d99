use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig::defaults_for(Player::One),
            two: PlayerConfig::defaults_for(Player::Two),
        }
    }
}

/// Presentation of one player. Unset fields fall back to that player's
/// defaults.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<char>,
}

impl PlayerConfig {
    fn defaults_for(player: Player) -> Self {
        PlayerConfig {
            name: Some(default_name(player)),
            symbol: Some(default_symbol(player)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontend {
    #[default]
    Console,
    Tui,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub frontend: Frontend,
}

fn default_name(player: Player) -> String {
    format!("Player {}", player.number())
}

fn default_symbol(player: Player) -> char {
    match player {
        Player::One => 'O',
        Player::Two => 'X',
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, or `None` if the file does not
    /// exist. A file that exists but fails to load is still an error.
    pub fn load_optional(path: &Path) -> Result<Option<Self>, ConfigError> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }

    fn player(&self, player: Player) -> &PlayerConfig {
        match player {
            Player::One => &self.players.one,
            Player::Two => &self.players.two,
        }
    }

    /// Display name for `player`
    pub fn player_name(&self, player: Player) -> String {
        self.player(player)
            .name
            .clone()
            .unwrap_or_else(|| default_name(player))
    }

    /// Marker symbol for `player`
    pub fn player_symbol(&self, player: Player) -> char {
        self.player(player)
            .symbol
            .unwrap_or_else(|| default_symbol(player))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (player, key) in [(Player::One, "one"), (Player::Two, "two")] {
            if self.player_name(player).trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.name must not be empty"
                )));
            }
            let symbol = self.player_symbol(player);
            // The grids are laid out one column per symbol
            if !symbol.is_ascii_graphic() {
                return Err(ConfigError::Validation(format!(
                    "players.{key}.symbol must be a single visible ASCII character"
                )));
            }
        }

        if self.player_symbol(Player::One) == self.player_symbol(Player::Two) {
            return Err(ConfigError::Validation(
                "players.one.symbol and players.two.symbol must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
