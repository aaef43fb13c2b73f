//! The board chosen for provisioning.

use super::{BoardDomainError, Fqbn};
use serde::{Deserialize, Serialize};

/// A concrete board chosen from the detected ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedBoard {
    fqbn: Fqbn,
    serial_number: String,
    port_address: String,
}

impl SelectedBoard {
    /// Creates a selected board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyPortAddress`] or
    /// [`BoardDomainError::EmptySerialNumber`] when either value is blank.
    pub fn new(
        fqbn: Fqbn,
        serial_number: impl Into<String>,
        port_address: impl Into<String>,
    ) -> Result<Self, BoardDomainError> {
        let serial = serial_number.into();
        let address = port_address.into();

        if address.trim().is_empty() {
            return Err(BoardDomainError::EmptyPortAddress);
        }
        if serial.trim().is_empty() {
            return Err(BoardDomainError::EmptySerialNumber(address));
        }

        Ok(Self {
            fqbn,
            serial_number: serial,
            port_address: address,
        })
    }

    /// Returns the board FQBN.
    #[must_use]
    pub const fn fqbn(&self) -> &Fqbn {
        &self.fqbn
    }

    /// Returns the board type code derived from the FQBN.
    #[must_use]
    pub fn board_type(&self) -> &str {
        self.fqbn.board_type()
    }

    /// Returns the serial number of the board.
    #[must_use]
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Returns the address of the port the board is attached to.
    #[must_use]
    pub fn port_address(&self) -> &str {
        &self.port_address
    }
}
