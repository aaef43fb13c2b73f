//! In-memory board catalog for tests and scripted discovery.

use crate::board::{
    domain::DetectedPort,
    ports::{BoardCatalog, BoardCatalogError, BoardCatalogResult},
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Board catalog that reports a fixed list of ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardCatalog {
    state: Arc<RwLock<InMemoryCatalogState>>,
}

#[derive(Debug, Default)]
struct InMemoryCatalogState {
    ports: Vec<DetectedPort>,
    failure: Option<String>,
    list_calls: usize,
}

impl InMemoryBoardCatalog {
    /// Creates a catalog that detects nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog reporting the given ports, in order.
    #[must_use]
    pub fn with_ports(ports: impl IntoIterator<Item = DetectedPort>) -> Self {
        let state = InMemoryCatalogState {
            ports: ports.into_iter().collect(),
            ..InMemoryCatalogState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Replaces the reported ports.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Runtime`] when lock acquisition fails.
    pub fn set_ports(&self, ports: impl IntoIterator<Item = DetectedPort>) -> BoardCatalogResult<()> {
        let mut state = self.write_state()?;
        state.ports = ports.into_iter().collect();
        Ok(())
    }

    /// Makes every subsequent discovery fail with the given message.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Runtime`] when lock acquisition fails.
    pub fn fail_with(&self, message: impl Into<String>) -> BoardCatalogResult<()> {
        let mut state = self.write_state()?;
        state.failure = Some(message.into());
        Ok(())
    }

    /// Returns how many times discovery has run.
    ///
    /// # Errors
    ///
    /// Returns [`BoardCatalogError::Runtime`] when lock acquisition fails.
    pub fn list_calls(&self) -> BoardCatalogResult<usize> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardCatalogError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.list_calls)
    }

    fn write_state(
        &self,
    ) -> BoardCatalogResult<std::sync::RwLockWriteGuard<'_, InMemoryCatalogState>> {
        self.state
            .write()
            .map_err(|err| BoardCatalogError::runtime(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl BoardCatalog for InMemoryBoardCatalog {
    async fn list_ports(&self) -> BoardCatalogResult<Vec<DetectedPort>> {
        let mut state = self.write_state()?;
        state.list_calls += 1;

        if let Some(message) = &state.failure {
            return Err(BoardCatalogError::runtime(std::io::Error::other(
                message.clone(),
            )));
        }

        Ok(state.ports.clone())
    }
}
