//! Error types for device domain validation.

use thiserror::Error;

/// Errors returned while constructing device domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeviceDomainError {
    /// The device name is empty after trimming.
    #[error("device name not specified")]
    EmptyDeviceName,
}
