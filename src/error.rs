use std::path::PathBuf;

/// Errors returned when a move is rejected. None of these change game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("placement failed: {0}")]
    Placement(#[from] PlaceError),
}

/// Errors from writing a single cell of the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },

    #[error("cell ({row}, {column}) is already occupied")]
    Occupied { row: usize, column: usize },

    #[error("cell ({row}, {column}) is not the lowest empty cell in its column")]
    Floating { row: usize, column: usize },
}

/// Errors from constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(
        "invalid board dimensions {width}x{height}: both must be in 1..={}",
        crate::game::MAX_DIMENSION
    )]
    InvalidDimensions { width: usize, height: usize },
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
