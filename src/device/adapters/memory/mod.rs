//! In-memory adapters for deterministic provisioning flows and tests.

mod provisioner;
mod registry;

pub use provisioner::InMemoryBoardProvisioner;
pub use registry::InMemoryDeviceRegistry;
