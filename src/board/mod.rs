//! Board discovery and selection for devprov.
//!
//! Locally attached boards are reported by a board catalog as a list of
//! detected ports, each carrying zero or more candidate boards. The selector
//! narrows that list down to a single board using optional port and FQBN
//! filters. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Selection services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
