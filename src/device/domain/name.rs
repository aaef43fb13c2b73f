//! Validated device name type.

use super::DeviceDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable device name shown in the cloud registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceName(String);

impl DeviceName {
    /// Creates a validated device name.
    ///
    /// The value is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceDomainError::EmptyDeviceName`] when the value is empty
    /// or only whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, DeviceDomainError> {
        let name = value.into();
        if name.trim().is_empty() {
            return Err(DeviceDomainError::EmptyDeviceName);
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DeviceName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DeviceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
