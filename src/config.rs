use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS, RUN_LENGTH};

/// Largest board side accepted from config or the command line.
pub const MAX_BOARD_SIDE: usize = 64;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub logging: LoggingConfig,
}

/// Board dimensions for every round in a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub height: usize,
    pub width: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            height: DEFAULT_ROWS,
            width: DEFAULT_COLS,
        }
    }
}

/// Log filter and destination. With no `file`, logging stays off since the
/// terminal UI owns stdout.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.height < RUN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.height must be >= {RUN_LENGTH}"
            )));
        }
        if self.board.width < RUN_LENGTH {
            return Err(ConfigError::Validation(format!(
                "board.width must be >= {RUN_LENGTH}"
            )));
        }
        if self.board.height > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.height must be <= {MAX_BOARD_SIDE}"
            )));
        }
        if self.board.width > MAX_BOARD_SIDE {
            return Err(ConfigError::Validation(format!(
                "board.width must be <= {MAX_BOARD_SIDE}"
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
