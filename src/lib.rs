//! devprov: provisions locally attached boards into a cloud device registry.
//!
//! The crate discovers the boards attached to this machine, selects one by
//! port and FQBN, registers it as a device with the cloud registry and
//! writes the device identity onto the board. A registration whose
//! provisioning fails is rolled back so the registry and the board agree.
//!
//! # Architecture
//!
//! devprov follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Board discovery and selection
//! - [`device`]: Device registration, provisioning and rollback
//! - [`config`]: Workflow configuration
//! - [`logging`]: Subscriber setup for the `tracing` events the crate emits

pub mod board;
pub mod config;
pub mod device;
pub mod logging;
