//! In-memory board provisioner.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::SelectedBoard;
use crate::device::{
    domain::DeviceId,
    ports::{BoardProvisioner, BoardProvisionerError, BoardProvisionerResult},
};

/// Provisioner that records which device identity each board received.
///
/// Boards are keyed by serial number. A failure can be scripted per serial
/// number to exercise rollback paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardProvisioner {
    state: Arc<RwLock<InMemoryProvisionerState>>,
}

#[derive(Debug, Default)]
struct InMemoryProvisionerState {
    provisioned: HashMap<String, DeviceId>,
    failures: HashMap<String, String>,
}

impl InMemoryBoardProvisioner {
    /// Creates a provisioner that accepts every board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes provisioning of the board with `serial_number` fail.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProvisionerError::Runtime`] when lock acquisition
    /// fails.
    pub fn fail_for_serial(
        &self,
        serial_number: impl Into<String>,
        reason: impl Into<String>,
    ) -> BoardProvisionerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardProvisionerError::runtime(std::io::Error::other(err.to_string())))?;
        state.failures.insert(serial_number.into(), reason.into());
        Ok(())
    }

    /// Returns the device identity written to the board, if any.
    ///
    /// # Errors
    ///
    /// Returns [`BoardProvisionerError::Runtime`] when lock acquisition
    /// fails.
    pub fn provisioned_device(&self, serial_number: &str) -> BoardProvisionerResult<Option<DeviceId>> {
        let state = self
            .state
            .read()
            .map_err(|err| BoardProvisionerError::runtime(std::io::Error::other(err.to_string())))?;
        Ok(state.provisioned.get(serial_number).cloned())
    }
}

#[async_trait]
impl BoardProvisioner for InMemoryBoardProvisioner {
    async fn provision(
        &self,
        board: &SelectedBoard,
        device_id: &DeviceId,
    ) -> BoardProvisionerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| BoardProvisionerError::runtime(std::io::Error::other(err.to_string())))?;

        if let Some(reason) = state.failures.get(board.serial_number()) {
            return Err(BoardProvisionerError::Rejected(reason.clone()));
        }

        state
            .provisioned
            .insert(board.serial_number().to_owned(), device_id.clone());
        Ok(())
    }
}
