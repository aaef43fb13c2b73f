//! Port contracts for device registration and provisioning.
//!
//! Ports define infrastructure-agnostic interfaces used by the provisioning
//! service.

mod provisioner;
mod registry;

pub use provisioner::{BoardProvisioner, BoardProvisionerError, BoardProvisionerResult};
pub use registry::{DeviceRegistry, DeviceRegistryError, DeviceRegistryResult};

#[cfg(test)]
pub use provisioner::MockBoardProvisioner;
#[cfg(test)]
pub use registry::MockDeviceRegistry;
