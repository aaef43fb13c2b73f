//! Registry port for cloud device records.

use crate::device::domain::{DeviceId, NewDevice, RemoteDevice};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for device registry operations.
pub type DeviceRegistryResult<T> = Result<T, DeviceRegistryError>;

/// Remote device registry contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    /// Creates a device record and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRegistryError::Rejected`] when the registry refuses
    /// the record or [`DeviceRegistryError::Transport`] when it cannot be
    /// reached.
    async fn create(&self, device: &NewDevice) -> DeviceRegistryResult<RemoteDevice>;

    /// Lists every device record.
    async fn list(&self) -> DeviceRegistryResult<Vec<RemoteDevice>>;

    /// Deletes a device record.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRegistryError::NotFound`] when no record has the
    /// identifier.
    async fn delete(&self, id: &DeviceId) -> DeviceRegistryResult<()>;
}

/// Errors returned by device registry implementations.
#[derive(Debug, Clone, Error)]
pub enum DeviceRegistryError {
    /// No device has the given identifier.
    #[error("device not found: {0}")]
    NotFound(DeviceId),

    /// The registry refused the request.
    #[error("registry rejected the request: {0}")]
    Rejected(String),

    /// The registry could not be reached or answered unexpectedly.
    #[error("registry transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl DeviceRegistryError {
    /// Wraps a transport failure.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
