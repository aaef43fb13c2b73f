//! Board selection services.

mod discovery;
mod selector;

pub use discovery::{BoardDiscoveryError, BoardDiscoveryResult, BoardDiscoveryService};
pub use selector::{BoardSelectionError, select_board};
