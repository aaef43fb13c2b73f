//! Discovery service combining the board catalog with selection.

use super::{BoardSelectionError, select_board};
use crate::board::{
    domain::{BoardFilter, DetectedPort, SelectedBoard},
    ports::{BoardCatalog, BoardCatalogError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors returned by [`BoardDiscoveryService`].
#[derive(Debug, Clone, Error)]
pub enum BoardDiscoveryError {
    /// Listing the attached ports failed.
    #[error(transparent)]
    Catalog(#[from] BoardCatalogError),
    /// No board could be selected.
    #[error(transparent)]
    Selection(#[from] BoardSelectionError),
}

/// Result type for board discovery operations.
pub type BoardDiscoveryResult<T> = Result<T, BoardDiscoveryError>;

/// Finds the board to provision among the locally attached ones.
#[derive(Clone)]
pub struct BoardDiscoveryService<C>
where
    C: BoardCatalog,
{
    catalog: Arc<C>,
}

impl<C> BoardDiscoveryService<C>
where
    C: BoardCatalog,
{
    /// Creates a discovery service over the given catalog.
    #[must_use]
    pub const fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// Lists every detected port as reported by the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDiscoveryError::Catalog`] when discovery fails.
    pub async fn list_ports(&self) -> BoardDiscoveryResult<Vec<DetectedPort>> {
        Ok(self.catalog.list_ports().await?)
    }

    /// Runs discovery and selects one board matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDiscoveryError::Catalog`] when discovery fails and
    /// [`BoardDiscoveryError::Selection`] when no valid board matches.
    pub async fn discover(&self, filter: &BoardFilter) -> BoardDiscoveryResult<SelectedBoard> {
        let ports = self.catalog.list_ports().await?;
        debug!(ports = ports.len(), "board discovery finished");

        let board = select_board(&ports, filter)?;
        debug!(
            fqbn = %board.fqbn(),
            port = board.port_address(),
            serial = board.serial_number(),
            "board selected"
        );
        Ok(board)
    }
}
