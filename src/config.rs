//! Application configuration loaded from TOML.

use crate::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board sizes offered to players.
pub const BOARD_SIZES: RangeInclusive<usize> = 2..=11;

/// Front-end settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board side length used until changed from the main menu.
    board_size: usize,

    /// Skip the main menu and start straight into this mode.
    start_mode: Option<Mode>,

    /// Seed for the CPU player's RNG; random when absent.
    seed: Option<u64>,

    /// Default `tracing` filter, overridden by `RUST_LOG`.
    log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            start_mode: None,
            seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values against the ranges the front-end supports.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !BOARD_SIZES.contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "board_size must be between {} and {}, got {}",
                BOARD_SIZES.start(),
                BOARD_SIZES.end(),
                self.board_size
            )));
        }
        Ok(())
    }

    /// Applies command-line overrides and re-validates.
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        start_mode: Option<Mode>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = size;
        }
        if start_mode.is_some() {
            self.start_mode = start_mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
