//! Catalog port listing the ports and boards attached to this machine.

use crate::board::domain::DetectedPort;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board catalog operations.
pub type BoardCatalogResult<T> = Result<T, BoardCatalogError>;

/// Board enumeration contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardCatalog: Send + Sync {
    /// Lists every detected port with its candidate boards.
    ///
    /// Each call performs a fresh discovery. Port order is meaningful and is
    /// preserved by callers.
    async fn list_ports(&self) -> BoardCatalogResult<Vec<DetectedPort>>;
}

/// Errors returned by board catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardCatalogError {
    /// The discovery tool could not be started.
    #[error("cannot run board discovery: {0}")]
    Spawn(Arc<dyn std::error::Error + Send + Sync>),

    /// The discovery tool exited unsuccessfully.
    #[error("board discovery exited with status {status:?}: {stderr}")]
    CommandFailed {
        /// Exit code, when the process was not killed by a signal.
        status: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The discovery output could not be decoded.
    #[error("invalid board discovery output: {0}")]
    InvalidOutput(Arc<dyn std::error::Error + Send + Sync>),

    /// Generic discovery failure.
    #[error("board discovery failed: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardCatalogError {
    /// Wraps a failure to start the discovery tool.
    pub fn spawn(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Spawn(Arc::new(err))
    }

    /// Wraps a decoding failure of the discovery output.
    pub fn invalid_output(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidOutput(Arc::new(err))
    }

    /// Wraps a generic discovery failure.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
