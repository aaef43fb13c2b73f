//! Board discovery through the in-memory catalog.

use std::sync::Arc;

use super::helpers::workbench_ports;
use devprov::board::{
    adapters::InMemoryBoardCatalog,
    domain::{BoardFilter, ScanPolicy},
    ports::BoardCatalogError,
    services::{BoardDiscoveryError, BoardDiscoveryService, BoardSelectionError},
};
use rstest::{fixture, rstest};

#[fixture]
fn catalog() -> Arc<InMemoryBoardCatalog> {
    Arc::new(InMemoryBoardCatalog::with_ports(workbench_ports()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unfiltered_discovery_skips_bare_serial_port(catalog: Arc<InMemoryBoardCatalog>) {
    let service = BoardDiscoveryService::new(catalog.clone());

    let board = service
        .discover(&BoardFilter::any())
        .await
        .expect("a board should be found");

    assert_eq!(board.port_address(), "/dev/ttyACM0");
    assert_eq!(board.board_type(), "mkr1000");
    assert_eq!(catalog.list_calls().expect("catalog state"), 1);
}

#[rstest]
#[case(BoardFilter::any().on_port("/dev/ttyACM1"), "77F0")]
#[case(
    BoardFilter::any()
        .with_fqbn("arduino:samd:mkrwifi1010")
        .with_scan_policy(ScanPolicy::ContinueScanning),
    "77F0"
)]
#[case(BoardFilter::any().with_fqbn("arduino:samd:mkr1000"), "50E1")]
#[tokio::test(flavor = "multi_thread")]
async fn filters_pick_expected_board(
    catalog: Arc<InMemoryBoardCatalog>,
    #[case] filter: BoardFilter,
    #[case] serial: &str,
) {
    let board = BoardDiscoveryService::new(catalog)
        .discover(&filter)
        .await
        .expect("a board should be found");

    assert_eq!(board.serial_number(), serial);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn first_candidate_port_stops_scanning(catalog: Arc<InMemoryBoardCatalog>) {
    let filter = BoardFilter::any().with_fqbn("arduino:samd:mkrwifi1010");

    let result = BoardDiscoveryService::new(catalog).discover(&filter).await;

    assert!(matches!(
        result,
        Err(BoardDiscoveryError::Selection(BoardSelectionError::NotFound))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn catalog_failure_is_surfaced(catalog: Arc<InMemoryBoardCatalog>) {
    catalog
        .fail_with("arduino-cli daemon crashed")
        .expect("script failure");

    let result = BoardDiscoveryService::new(catalog)
        .discover(&BoardFilter::any())
        .await;

    assert!(matches!(
        result,
        Err(BoardDiscoveryError::Catalog(BoardCatalogError::Runtime(_)))
    ));
}
