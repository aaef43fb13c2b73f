//! Detected ports and their candidate boards.

use serde::{Deserialize, Serialize};

/// A board the discovery source believes is attached to a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCandidate {
    fqbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl BoardCandidate {
    /// Creates a candidate from the FQBN reported by discovery.
    ///
    /// The FQBN is not validated here; selection rejects malformed values.
    #[must_use]
    pub fn new(fqbn: impl Into<String>) -> Self {
        Self {
            fqbn: fqbn.into(),
            name: None,
        }
    }

    /// Sets the human-readable board name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the FQBN as reported by discovery.
    #[must_use]
    pub fn fqbn(&self) -> &str {
        &self.fqbn
    }

    /// Returns the human-readable board name, if reported.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A local communication endpoint through which boards were detected.
///
/// Candidate boards keep the order reported by discovery; selection relies
/// on it to break ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedPort {
    address: String,
    serial_number: String,
    boards: Vec<BoardCandidate>,
}

impl DetectedPort {
    /// Creates a port with no candidate boards.
    #[must_use]
    pub fn new(address: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            serial_number: serial_number.into(),
            boards: Vec::new(),
        }
    }

    /// Appends a candidate board.
    #[must_use]
    pub fn with_board(mut self, board: BoardCandidate) -> Self {
        self.boards.push(board);
        self
    }

    /// Appends several candidate boards, keeping their order.
    #[must_use]
    pub fn with_boards(mut self, boards: impl IntoIterator<Item = BoardCandidate>) -> Self {
        self.boards.extend(boards);
        self
    }

    /// Returns the port address, e.g. `/dev/ttyACM0`.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the serial number of the attached hardware.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the candidate boards in discovery order.
    #[must_use]
    pub fn boards(&self) -> &[BoardCandidate] {
        &self.boards
    }
}
