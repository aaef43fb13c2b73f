//! Caller-facing device summary.

use super::RemoteDevice;
use serde::{Deserialize, Serialize};

/// Summary of a cloud device, serialised as
/// `{"name", "id", "board", "serial", "fqbn"}`.
///
/// The field names are an external contract for JSON consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name.
    pub name: String,
    /// Registry identifier.
    pub id: String,
    /// Board type code.
    pub board: String,
    /// Board serial number.
    pub serial: String,
    /// Board FQBN.
    pub fqbn: String,
}

impl From<&RemoteDevice> for DeviceInfo {
    fn from(device: &RemoteDevice) -> Self {
        Self {
            name: device.name().to_owned(),
            id: device.id().as_str().to_owned(),
            board: device.device_type().to_owned(),
            serial: device.serial().to_owned(),
            fqbn: device.fqbn().to_owned(),
        }
    }
}

impl From<RemoteDevice> for DeviceInfo {
    fn from(device: RemoteDevice) -> Self {
        Self::from(&device)
    }
}
