//! Shared world state for device provisioning BDD scenarios.

use std::sync::Arc;

use devprov::board::{adapters::InMemoryBoardCatalog, domain::DetectedPort};
use devprov::device::{
    adapters::{InMemoryBoardProvisioner, InMemoryDeviceRegistry},
    domain::DeviceInfo,
    services::{ProvisioningResult, ProvisioningService},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestProvisioningService =
    ProvisioningService<InMemoryBoardCatalog, InMemoryDeviceRegistry, InMemoryBoardProvisioner>;

/// Scenario world for device provisioning behaviour tests.
pub struct ProvisioningWorld {
    /// Catalog listing the attached boards.
    pub catalog: Arc<InMemoryBoardCatalog>,
    /// Device registry.
    pub registry: Arc<InMemoryDeviceRegistry>,
    /// On-board provisioner.
    pub provisioner: Arc<InMemoryBoardProvisioner>,
    /// The provisioning service under test.
    pub service: TestProvisioningService,
    /// Ports attached so far in the scenario.
    pub attached: Vec<DetectedPort>,
    /// Result of the last create attempt.
    pub last_create_result: Option<ProvisioningResult<DeviceInfo>>,
}

impl ProvisioningWorld {
    /// Creates a world with no attached boards.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Arc::new(InMemoryBoardCatalog::new());
        let registry = Arc::new(InMemoryDeviceRegistry::new());
        let provisioner = Arc::new(InMemoryBoardProvisioner::new());
        let service =
            ProvisioningService::new(catalog.clone(), registry.clone(), provisioner.clone());
        Self {
            catalog,
            registry,
            provisioner,
            service,
            attached: Vec::new(),
            last_create_result: None,
        }
    }

    /// Returns the result of the last create attempt.
    ///
    /// # Errors
    ///
    /// Returns an error when no device has been created in the scenario.
    pub fn last_result(&self) -> Result<&ProvisioningResult<DeviceInfo>, eyre::Report> {
        self.last_create_result
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))
    }
}

impl Default for ProvisioningWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProvisioningWorld {
    ProvisioningWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
