//! File-backed configuration for the provisioning workflow.
//!
//! Configuration is JSON and every field is optional:
//!
//! ```json
//! {
//!   "scan": "continue_scanning",
//!   "rollback": {"max_attempts": 5, "initial_backoff_ms": 250, "backoff_multiplier": 2},
//!   "arduino_cli": {"path": "/usr/local/bin/arduino-cli"}
//! }
//! ```
//!
//! Files are read through a capability-scoped directory handle so callers
//! decide which part of the filesystem is visible.

use crate::board::{
    adapters::ArduinoCliBoardCatalog,
    domain::{BoardFilter, ScanPolicy},
};
use crate::device::services::RollbackPolicy;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_ARDUINO_CLI: &str = "arduino-cli";

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path of the file, relative to the directory it was opened from.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: Arc<std::io::Error>,
    },

    /// The configuration is not valid JSON for this schema.
    #[error("invalid config: {0}")]
    Parse(Arc<serde_json::Error>),

    /// A value is out of range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Rollback retry settings as written in the configuration file.
///
/// Defaults to a single delete attempt; retry is enabled by raising
/// `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RollbackSettings {
    /// Delete attempts before giving up, at least one.
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub initial_backoff_ms: u64,
    /// Factor applied to the delay after each failure, at least one.
    pub backoff_multiplier: u32,
}

impl Default for RollbackSettings {
    fn default() -> Self {
        let policy = RollbackPolicy::default();
        Self {
            max_attempts: policy.max_attempts(),
            initial_backoff_ms: u64::try_from(policy.initial_backoff().as_millis())
                .unwrap_or(u64::MAX),
            backoff_multiplier: policy.backoff_multiplier(),
        }
    }
}

/// `arduino-cli` settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArduinoCliSettings {
    /// Executable to run; bare names are resolved through `PATH`.
    pub path: Utf8PathBuf,
}

impl Default for ArduinoCliSettings {
    fn default() -> Self {
        Self {
            path: Utf8PathBuf::from(DEFAULT_ARDUINO_CLI),
        }
    }
}

/// Provisioning workflow configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisioningConfig {
    /// Board selection scan policy.
    pub scan: ScanPolicy,
    /// Rollback retry settings.
    pub rollback: RollbackSettings,
    /// Board discovery tool settings.
    pub arduino_cli: ArduinoCliSettings,
}

impl ProvisioningConfig {
    /// Parses and validates configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields
    /// and [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(Arc::new(err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise
    /// the errors of [`Self::from_json_str`].
    pub fn load(dir: &Dir, path: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = dir.read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_owned(),
            source: Arc::new(err),
        })?;
        Self::from_json_str(&raw)
    }

    /// Loads configuration from a path on the ambient filesystem.
    ///
    /// Only the parent directory of `path` is opened.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `path` names no file and the
    /// errors of [`Self::load`].
    pub fn load_from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::Invalid(format!("config path '{path}' names no file")))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            ConfigError::Io {
                path: parent.to_owned(),
                source: Arc::new(err),
            }
        })?;
        Self::load(&dir, Utf8Path::new(file_name))
    }

    /// Returns the rollback policy described by this configuration.
    #[must_use]
    pub fn rollback_policy(&self) -> RollbackPolicy {
        RollbackPolicy::new(
            self.rollback.max_attempts,
            Duration::from_millis(self.rollback.initial_backoff_ms),
            self.rollback.backoff_multiplier,
        )
    }

    /// Returns an unrestricted board filter using the configured scan
    /// policy.
    #[must_use]
    pub fn board_filter(&self) -> BoardFilter {
        BoardFilter::any().with_scan_policy(self.scan)
    }

    /// Returns a board catalog running the configured `arduino-cli`.
    #[must_use]
    pub fn arduino_cli_catalog(&self) -> ArduinoCliBoardCatalog {
        ArduinoCliBoardCatalog::new(self.arduino_cli.path.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rollback.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "rollback.max_attempts must be at least 1".to_owned(),
            ));
        }
        if self.rollback.backoff_multiplier == 0 {
            return Err(ConfigError::Invalid(
                "rollback.backoff_multiplier must be at least 1".to_owned(),
            ));
        }
        if self.arduino_cli.path.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid(
                "arduino_cli.path must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
