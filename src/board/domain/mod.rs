//! Domain model for board discovery and selection.
//!
//! Detected ports and their candidate boards are kept exactly as the
//! discovery source reported them. Validation happens when a candidate is
//! turned into a [`SelectedBoard`].

mod error;
mod filter;
mod fqbn;
mod port;
mod selected;

pub use error::BoardDomainError;
pub use filter::{BoardFilter, ScanPolicy};
pub use fqbn::Fqbn;
pub use port::{BoardCandidate, DetectedPort};
pub use selected::SelectedBoard;
