//! Service layer for the create, provision and roll back workflow.
//!
//! Provides [`ProvisioningService`], which owns the window between creating
//! a registry record and finishing on-board provisioning. If provisioning
//! fails inside that window the record is deleted again according to the
//! configured [`RollbackPolicy`].

use super::rollback::{RollbackOutcome, RollbackPolicy, roll_back};
use crate::board::{
    domain::{BoardDomainError, BoardFilter, SelectedBoard},
    ports::{BoardCatalog, BoardCatalogError},
    services::{BoardDiscoveryError, BoardDiscoveryService, BoardSelectionError},
};
use crate::device::{
    domain::{DeviceDomainError, DeviceId, DeviceInfo, DeviceName, NewDevice},
    ports::{BoardProvisioner, BoardProvisionerError, DeviceRegistry, DeviceRegistryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Request payload for creating and provisioning a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeviceRequest {
    name: String,
    filter: BoardFilter,
}

impl CreateDeviceRequest {
    /// Creates a request that provisions the first board found.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter: BoardFilter::any(),
        }
    }

    /// Sets the board filter.
    #[must_use]
    pub fn with_filter(mut self, filter: BoardFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the requested device name, unvalidated.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board filter.
    #[must_use]
    pub const fn filter(&self) -> &BoardFilter {
        &self.filter
    }
}

/// Service-level errors for the provisioning workflow.
#[derive(Debug, Error)]
pub enum ProvisioningError {
    /// The device name is invalid.
    #[error(transparent)]
    Domain(#[from] DeviceDomainError),

    /// Listing the attached boards failed.
    #[error(transparent)]
    Discovery(BoardCatalogError),

    /// No attached board matches the filters.
    #[error("no board found")]
    BoardNotFound,

    /// The matching board carries invalid discovery data.
    #[error(transparent)]
    InvalidBoard(BoardDomainError),

    /// The registry failed to create the device. Nothing was created.
    #[error("cannot create device: {0}")]
    Create(#[source] DeviceRegistryError),

    /// On-board provisioning failed after the device was created.
    ///
    /// `source` is always the provisioning failure. The outcome of deleting
    /// the registry record is carried in `rollback`.
    #[error("cannot provision device {device_id}: {source}")]
    Provision {
        /// Identifier of the device created for the board.
        device_id: DeviceId,
        /// The provisioning failure.
        source: BoardProvisionerError,
        /// Outcome of removing the device from the registry.
        rollback: RollbackOutcome,
    },

    /// A registry listing or deletion failed.
    #[error(transparent)]
    Registry(#[from] DeviceRegistryError),
}

impl ProvisioningError {
    /// Returns `true` for errors the caller can fix by changing the request
    /// or the attached hardware, as opposed to system failures.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Domain(_) | Self::BoardNotFound)
    }

    /// Returns the device left behind in the registry, if rollback failed.
    #[must_use]
    pub const fn orphaned_device(&self) -> Option<&DeviceId> {
        match self {
            Self::Provision {
                rollback: RollbackOutcome::Failed(err),
                ..
            } => Some(err.device_id()),
            _ => None,
        }
    }
}

impl From<BoardDiscoveryError> for ProvisioningError {
    fn from(err: BoardDiscoveryError) -> Self {
        match err {
            BoardDiscoveryError::Catalog(catalog) => Self::Discovery(catalog),
            BoardDiscoveryError::Selection(BoardSelectionError::NotFound) => Self::BoardNotFound,
            BoardDiscoveryError::Selection(BoardSelectionError::InvalidBoard(board)) => {
                Self::InvalidBoard(board)
            }
        }
    }
}

/// Result type for provisioning service operations.
pub type ProvisioningResult<T> = Result<T, ProvisioningError>;

/// Device provisioning orchestration service.
#[derive(Clone)]
pub struct ProvisioningService<C, R, P>
where
    C: BoardCatalog,
    R: DeviceRegistry,
    P: BoardProvisioner,
{
    discovery: BoardDiscoveryService<C>,
    registry: Arc<R>,
    provisioner: Arc<P>,
    rollback_policy: RollbackPolicy,
}

impl<C, R, P> ProvisioningService<C, R, P>
where
    C: BoardCatalog,
    R: DeviceRegistry,
    P: BoardProvisioner,
{
    /// Creates a provisioning service with the default rollback policy.
    #[must_use]
    pub fn new(catalog: Arc<C>, registry: Arc<R>, provisioner: Arc<P>) -> Self {
        Self {
            discovery: BoardDiscoveryService::new(catalog),
            registry,
            provisioner,
            rollback_policy: RollbackPolicy::default(),
        }
    }

    /// Replaces the rollback policy.
    #[must_use]
    pub const fn with_rollback_policy(mut self, policy: RollbackPolicy) -> Self {
        self.rollback_policy = policy;
        self
    }

    /// Returns the rollback policy in use.
    #[must_use]
    pub const fn rollback_policy(&self) -> &RollbackPolicy {
        &self.rollback_policy
    }

    /// Finds the board matching the request, registers it and provisions it.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Domain`] for a blank name,
    /// [`ProvisioningError::Discovery`], [`ProvisioningError::BoardNotFound`]
    /// or [`ProvisioningError::InvalidBoard`] when no board can be selected,
    /// and the errors of [`Self::provision`].
    pub async fn create(&self, request: CreateDeviceRequest) -> ProvisioningResult<DeviceInfo> {
        let CreateDeviceRequest { name, filter } = request;

        let device_name = DeviceName::new(name)?;
        let board = self.discovery.discover(&filter).await?;
        self.provision(&board, &device_name).await
    }

    /// Registers `board` as a device named `name` and provisions it.
    ///
    /// The registry receives exactly one create request. If provisioning
    /// fails, the created device is deleted under the rollback policy.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Create`] when the registry rejects the
    /// device, in which case nothing was created, or
    /// [`ProvisioningError::Provision`] when on-board provisioning fails.
    pub async fn provision(
        &self,
        board: &SelectedBoard,
        name: &DeviceName,
    ) -> ProvisioningResult<DeviceInfo> {
        info!(
            fqbn = %board.fqbn(),
            serial = board.serial_number(),
            "creating a new device on the cloud"
        );
        let device = self
            .registry
            .create(&NewDevice::for_board(board, name.clone()))
            .await
            .map_err(ProvisioningError::Create)?;

        match self.provisioner.provision(board, device.id()).await {
            Ok(()) => {
                info!(
                    device_id = %device.id(),
                    port = board.port_address(),
                    "device provisioned"
                );
                Ok(DeviceInfo::from(device))
            }
            Err(source) => {
                warn!(
                    device_id = %device.id(),
                    error = %source,
                    "provisioning failed, deleting device from the cloud"
                );
                let rollback =
                    roll_back(self.registry.as_ref(), device.id(), &self.rollback_policy).await;
                if let RollbackOutcome::Failed(failure) = &rollback {
                    error!(
                        device_id = %failure.device_id(),
                        attempts = failure.attempts(),
                        error = %failure.last_error(),
                        "device left orphaned in the registry"
                    );
                }
                Err(ProvisioningError::Provision {
                    device_id: device.id().clone(),
                    source,
                    rollback,
                })
            }
        }
    }

    /// Lists every device in the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Registry`] when the registry listing
    /// fails.
    pub async fn list(&self) -> ProvisioningResult<Vec<DeviceInfo>> {
        let devices = self.registry.list().await?;
        Ok(devices.iter().map(DeviceInfo::from).collect())
    }

    /// Deletes a device from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisioningError::Registry`] when the device does not
    /// exist or the registry fails.
    pub async fn delete(&self, id: &DeviceId) -> ProvisioningResult<()> {
        self.registry.delete(id).await?;
        info!(device_id = %id, "device deleted");
        Ok(())
    }
}
