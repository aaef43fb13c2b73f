//! Cloud device registration and board provisioning for devprov.
//!
//! A selected board is registered as a device in the remote registry and
//! then provisioned with its cloud identity. When provisioning fails the
//! freshly created registry record is deleted again so the registry and the
//! physical board stay consistent. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
