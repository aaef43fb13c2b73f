//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use devprov::board::{
    adapters::InMemoryBoardCatalog,
    domain::{BoardCandidate, DetectedPort},
};
use devprov::device::{
    adapters::{InMemoryBoardProvisioner, InMemoryDeviceRegistry},
    services::ProvisioningService,
};
use rstest::fixture;

/// Service type wired to in-memory adapters.
pub type TestService =
    ProvisioningService<InMemoryBoardCatalog, InMemoryDeviceRegistry, InMemoryBoardProvisioner>;

/// Service under test with handles on its adapters.
pub struct Bench {
    /// Catalog of attached boards.
    pub catalog: Arc<InMemoryBoardCatalog>,
    /// Device registry.
    pub registry: Arc<InMemoryDeviceRegistry>,
    /// On-board provisioner.
    pub provisioner: Arc<InMemoryBoardProvisioner>,
    /// The provisioning service.
    pub service: TestService,
}

impl Bench {
    /// Wires a service to fresh adapters listing `ports`.
    #[must_use]
    pub fn with_ports(ports: Vec<DetectedPort>) -> Self {
        let catalog = Arc::new(InMemoryBoardCatalog::with_ports(ports));
        let registry = Arc::new(InMemoryDeviceRegistry::new());
        let provisioner = Arc::new(InMemoryBoardProvisioner::new());
        let service =
            ProvisioningService::new(catalog.clone(), registry.clone(), provisioner.clone());
        Self {
            catalog,
            registry,
            provisioner,
            service,
        }
    }
}

/// Two attached MKR boards on separate ports and one bare serial port.
#[must_use]
pub fn workbench_ports() -> Vec<DetectedPort> {
    vec![
        DetectedPort::new("/dev/ttyS0", ""),
        DetectedPort::new("/dev/ttyACM0", "50E1")
            .with_board(BoardCandidate::new("arduino:samd:mkr1000").with_name("Arduino MKR1000")),
        DetectedPort::new("/dev/ttyACM1", "77F0").with_board(
            BoardCandidate::new("arduino:samd:mkrwifi1010").with_name("Arduino MKR WiFi 1010"),
        ),
    ]
}

/// Provides a bench over [`workbench_ports`].
#[fixture]
pub fn bench() -> Bench {
    Bench::with_ports(workbench_ports())
}
