//! Fully-qualified board name.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

const SEGMENT_SEPARATOR: char = ':';
const MIN_SEGMENTS: usize = 3;

/// Validated fully-qualified board name, e.g. `arduino:samd:mkr1000`.
///
/// The value is kept verbatim. Only the segment count is checked; anything
/// after the third segment (board options) is carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fqbn(String);

impl Fqbn {
    /// Creates a validated FQBN.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::MalformedFqbn`] when the value has fewer
    /// than three `:`-delimited segments.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        if raw.split(SEGMENT_SEPARATOR).count() < MIN_SEGMENTS {
            return Err(BoardDomainError::MalformedFqbn(raw));
        }
        Ok(Self(raw))
    }

    /// Returns the vendor segment.
    #[must_use]
    pub fn vendor(&self) -> &str {
        self.segment(0)
    }

    /// Returns the architecture segment.
    #[must_use]
    pub fn architecture(&self) -> &str {
        self.segment(1)
    }

    /// Returns the board type code, the third segment.
    #[must_use]
    pub fn board_type(&self) -> &str {
        self.segment(2)
    }

    /// Returns the FQBN as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segment(&self, index: usize) -> &str {
        self.0
            .split(SEGMENT_SEPARATOR)
            .nth(index)
            .unwrap_or_default()
    }
}

impl TryFrom<String> for Fqbn {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Fqbn> for String {
    fn from(value: Fqbn) -> Self {
        value.0
    }
}

impl AsRef<str> for Fqbn {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Fqbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
