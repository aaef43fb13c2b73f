//! Port for writing cloud identity onto a physical board.

use crate::board::domain::SelectedBoard;
use crate::device::domain::DeviceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board provisioning operations.
pub type BoardProvisionerResult<T> = Result<T, BoardProvisionerError>;

/// On-board provisioning contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardProvisioner: Send + Sync {
    /// Provisions `board` with the identity of the registry device
    /// `device_id`.
    async fn provision(
        &self,
        board: &SelectedBoard,
        device_id: &DeviceId,
    ) -> BoardProvisionerResult<()>;
}

/// Errors returned by board provisioner implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardProvisionerError {
    /// The board could not be reached on its port.
    #[error("board on port {0} is unreachable")]
    Unreachable(String),

    /// The board refused the provisioning payload.
    #[error("board rejected provisioning: {0}")]
    Rejected(String),

    /// Generic provisioning failure.
    #[error("provisioning runtime error: {0}")]
    Runtime(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardProvisionerError {
    /// Wraps a runtime failure from the provisioner.
    pub fn runtime(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Runtime(Arc::new(err))
    }
}
