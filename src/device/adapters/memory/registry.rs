//! In-memory device registry.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::device::{
    domain::{DeviceId, NewDevice, RemoteDevice},
    ports::{DeviceRegistry, DeviceRegistryError, DeviceRegistryResult},
};

/// Thread-safe in-memory device registry.
///
/// Identifiers are random UUIDs. Failures can be injected for creation and
/// deletion, and every delete request is recorded so tests can assert on
/// rollback behaviour.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeviceRegistry {
    state: Arc<RwLock<InMemoryRegistryState>>,
}

#[derive(Debug, Default)]
struct InMemoryRegistryState {
    devices: Vec<RemoteDevice>,
    create_rejection: Option<String>,
    failing_deletes: usize,
    delete_requests: Vec<DeviceId>,
}

impl InMemoryDeviceRegistry {
    /// Creates an empty in-memory registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `create` fail with the given reason.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRegistryError::Transport`] when lock acquisition
    /// fails.
    pub fn reject_creates(&self, reason: impl Into<String>) -> DeviceRegistryResult<()> {
        let mut state = self.write_state()?;
        state.create_rejection = Some(reason.into());
        Ok(())
    }

    /// Makes the next `count` delete requests fail with a transport error.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRegistryError::Transport`] when lock acquisition
    /// fails.
    pub fn fail_next_deletes(&self, count: usize) -> DeviceRegistryResult<()> {
        let mut state = self.write_state()?;
        state.failing_deletes = count;
        Ok(())
    }

    /// Returns every delete request received, failed ones included.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceRegistryError::Transport`] when lock acquisition
    /// fails.
    pub fn delete_requests(&self) -> DeviceRegistryResult<Vec<DeviceId>> {
        let state = self
            .state
            .read()
            .map_err(|err| DeviceRegistryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.delete_requests.clone())
    }

    fn write_state(&self) -> DeviceRegistryResult<RwLockWriteGuard<'_, InMemoryRegistryState>> {
        self.state
            .write()
            .map_err(|err| DeviceRegistryError::transport(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl DeviceRegistry for InMemoryDeviceRegistry {
    async fn create(&self, device: &NewDevice) -> DeviceRegistryResult<RemoteDevice> {
        let mut state = self.write_state()?;

        if let Some(reason) = &state.create_rejection {
            return Err(DeviceRegistryError::Rejected(reason.clone()));
        }

        let id = DeviceId::new(Uuid::new_v4().to_string());
        let created = RemoteDevice::created(id, device);
        state.devices.push(created.clone());
        Ok(created)
    }

    async fn list(&self) -> DeviceRegistryResult<Vec<RemoteDevice>> {
        let state = self
            .state
            .read()
            .map_err(|err| DeviceRegistryError::transport(std::io::Error::other(err.to_string())))?;
        Ok(state.devices.clone())
    }

    async fn delete(&self, id: &DeviceId) -> DeviceRegistryResult<()> {
        let mut state = self.write_state()?;
        state.delete_requests.push(id.clone());

        if state.failing_deletes > 0 {
            state.failing_deletes -= 1;
            return Err(DeviceRegistryError::transport(std::io::Error::other(
                "registry unavailable",
            )));
        }

        let position = state
            .devices
            .iter()
            .position(|device| device.id() == id)
            .ok_or_else(|| DeviceRegistryError::NotFound(id.clone()))?;
        state.devices.remove(position);
        Ok(())
    }
}
