//! Domain model for cloud device records.
//!
//! Registry records are kept as the registry reported them; only values the
//! caller supplies (the device name) are validated here.

mod device;
mod error;
mod ids;
mod info;
mod name;

pub use device::{NewDevice, RemoteDevice, RemoteDeviceRecord};
pub use error::DeviceDomainError;
pub use ids::DeviceId;
pub use info::DeviceInfo;
pub use name::DeviceName;
