//! Match configuration: board size and peer link settings.
//!
//! Loaded from an optional TOML file; every field has a default, so a
//! partial file only overrides what it names. The console applies CLI
//! overrides on top.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{DEFAULT_MARBLES_PER_PIT, MAX_MARBLES_PER_PIT};
use crate::error::ConfigError;

/// Port side B listens on; side A listens on the next one.
pub const DEFAULT_PORT: u16 = 6969;

/// Configuration for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Marbles placed in every pit at the start (1..=21).
    pub marbles_per_pit: u8,

    /// Base game port. Side B listens here, side A on `port + 1`.
    pub port: u16,

    /// Seconds to wait for the opponent's move (0 = wait forever).
    pub receive_timeout_secs: u64,

    /// Connection attempts before giving up (0 = retry forever).
    pub connect_attempts: u32,

    /// Pause between connection attempts, in milliseconds.
    pub connect_retry_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            marbles_per_pit: DEFAULT_MARBLES_PER_PIT,
            port: DEFAULT_PORT,
            receive_timeout_secs: 300,
            connect_attempts: 0,
            connect_retry_ms: 500,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Set the starting marbles per pit.
    #[must_use]
    pub fn with_marbles_per_pit(mut self, marbles: u8) -> Self {
        self.marbles_per_pit = marbles;
        self
    }

    /// Set the base game port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the receive timeout in seconds (0 = wait forever).
    #[must_use]
    pub fn with_receive_timeout_secs(mut self, secs: u64) -> Self {
        self.receive_timeout_secs = secs;
        self
    }

    /// Receive timeout, `None` meaning block indefinitely.
    #[must_use]
    pub fn receive_timeout(&self) -> Option<Duration> {
        (self.receive_timeout_secs > 0).then(|| Duration::from_secs(self.receive_timeout_secs))
    }

    #[must_use]
    pub fn connect_retry(&self) -> Duration {
        Duration::from_millis(self.connect_retry_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marbles_per_pit == 0 || self.marbles_per_pit > MAX_MARBLES_PER_PIT {
            return Err(ConfigError::Validation(format!(
                "marbles_per_pit must be in 1..={MAX_MARBLES_PER_PIT}"
            )));
        }
        if self.port == 0 || self.port == u16::MAX {
            return Err(ConfigError::Validation(
                "port must be in 1..=65534".into(),
            ));
        }
        if self.connect_retry_ms == 0 {
            return Err(ConfigError::Validation(
                "connect_retry_ms must be > 0".into(),
            ));
        }

        Ok(())
    }
}
