//! Adapter implementations for the device registry and provisioner ports.

pub mod memory;

pub use memory::{InMemoryBoardProvisioner, InMemoryDeviceRegistry};
