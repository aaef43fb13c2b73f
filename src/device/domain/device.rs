//! Device records sent to and received from the registry.

use super::{DeviceId, DeviceName};
use crate::board::domain::{Fqbn, SelectedBoard};
use serde::{Deserialize, Serialize};

/// Payload for creating a device in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDevice {
    fqbn: Fqbn,
    name: DeviceName,
    serial: String,
    device_type: String,
}

impl NewDevice {
    /// Builds the creation payload for a selected board.
    #[must_use]
    pub fn for_board(board: &SelectedBoard, name: DeviceName) -> Self {
        Self {
            fqbn: board.fqbn().clone(),
            name,
            serial: board.serial_number().to_owned(),
            device_type: board.board_type().to_owned(),
        }
    }

    /// Returns the board FQBN.
    #[must_use]
    pub const fn fqbn(&self) -> &Fqbn {
        &self.fqbn
    }

    /// Returns the device name.
    #[must_use]
    pub const fn name(&self) -> &DeviceName {
        &self.name
    }

    /// Returns the board serial number.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Returns the board type code.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }
}

/// A device record held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDevice {
    id: DeviceId,
    name: String,
    device_type: String,
    serial: String,
    fqbn: String,
}

/// Parameter object for reconstructing a device reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDeviceRecord {
    /// Registry-assigned identifier.
    pub id: DeviceId,
    /// Device name.
    pub name: String,
    /// Board type code.
    pub device_type: String,
    /// Board serial number.
    pub serial: String,
    /// Board FQBN.
    pub fqbn: String,
}

impl RemoteDevice {
    /// Creates the record a registry stores for a creation payload.
    #[must_use]
    pub fn created(id: DeviceId, device: &NewDevice) -> Self {
        Self {
            id,
            name: device.name().as_str().to_owned(),
            device_type: device.device_type().to_owned(),
            serial: device.serial().to_owned(),
            fqbn: device.fqbn().as_str().to_owned(),
        }
    }

    /// Reconstructs a record as reported by the registry.
    #[must_use]
    pub fn from_record(record: RemoteDeviceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            device_type: record.device_type,
            serial: record.serial,
            fqbn: record.fqbn,
        }
    }

    /// Returns the registry identifier.
    #[must_use]
    pub const fn id(&self) -> &DeviceId {
        &self.id
    }

    /// Returns the device name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board type code.
    #[must_use]
    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    /// Returns the board serial number.
    #[must_use]
    pub fn serial(&self) -> &str {
        &self.serial
    }

    /// Returns the board FQBN.
    #[must_use]
    pub fn fqbn(&self) -> &str {
        &self.fqbn
    }
}
