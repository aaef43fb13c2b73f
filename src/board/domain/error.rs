//! Error types for board domain validation.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The FQBN has fewer than three `:`-delimited segments.
    #[error("malformed FQBN '{0}': expected vendor:architecture:board")]
    MalformedFqbn(String),

    /// The detected port reported no address.
    #[error("detected port has an empty address")]
    EmptyPortAddress,

    /// The detected port reported no serial number for the board.
    #[error("board on port {0} has no serial number")]
    EmptySerialNumber(String),
}
