use std::path::PathBuf;

/// Reasons a column number cannot be played. Recoverable: the same player
/// is asked again and the board is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IllegalMove {
    #[error("column {column} is outside 1-7")]
    OutOfRange { column: i64 },

    #[error("column {column} is full")]
    ColumnFull { column: i64 },
}

/// Failure of the underlying input stream. Always fatal to a game.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,

    #[error("error while reading input: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a game without a result.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input failure: {0}")]
    Input(#[from] InputError),

    #[error("failed to draw the game: {0}")]
    Render(std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
