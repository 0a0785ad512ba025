use std::path::PathBuf;

/// Rejected game operations. None of them change the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("board must be at least 4x4, got {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("column {column} is out of range (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,
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

/// Errors that can occur when installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}
