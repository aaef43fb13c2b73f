//! Port contracts for board discovery.

mod catalog;

pub use catalog::{BoardCatalog, BoardCatalogError, BoardCatalogResult};

#[cfg(test)]
pub use catalog::MockBoardCatalog;
