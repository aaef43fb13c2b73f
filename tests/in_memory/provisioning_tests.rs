//! End-to-end provisioning over in-memory adapters.

use super::helpers::{Bench, bench};
use devprov::board::domain::{BoardFilter, ScanPolicy};
use devprov::device::{
    domain::{DeviceId, DeviceInfo},
    services::{CreateDeviceRequest, ProvisioningError, RollbackOutcome, RollbackPolicy},
};
use rstest::rstest;
use std::time::Duration;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_then_delete(bench: Bench) {
    let created = bench
        .service
        .create(CreateDeviceRequest::new("abc"))
        .await
        .expect("create should succeed");

    assert_eq!(
        created,
        DeviceInfo {
            name: "abc".to_owned(),
            id: created.id.clone(),
            board: "mkr1000".to_owned(),
            serial: "50E1".to_owned(),
            fqbn: "arduino:samd:mkr1000".to_owned(),
        }
    );
    let listed = bench.service.list().await.expect("listing should succeed");
    assert_eq!(listed, vec![created.clone()]);

    bench
        .service
        .delete(&DeviceId::new(created.id))
        .await
        .expect("delete should succeed");
    let remaining = bench.service.list().await.expect("listing should succeed");
    assert!(remaining.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn two_boards_become_two_devices(bench: Bench) {
    let first = bench
        .service
        .create(CreateDeviceRequest::new("porch").with_filter(BoardFilter::any().on_port("/dev/ttyACM0")))
        .await
        .expect("first create should succeed");
    let wifi = BoardFilter::any()
        .with_fqbn("arduino:samd:mkrwifi1010")
        .with_scan_policy(ScanPolicy::ContinueScanning);
    let second = bench
        .service
        .create(CreateDeviceRequest::new("garage").with_filter(wifi))
        .await
        .expect("second create should succeed");

    assert_ne!(first.id, second.id);
    let listed = bench.service.list().await.expect("listing should succeed");
    let names: Vec<&str> = listed.iter().map(|device| device.name.as_str()).collect();
    assert_eq!(names, vec!["porch", "garage"]);
    assert_eq!(bench.catalog.list_calls().expect("catalog state"), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provisioning_failure_rolls_back_exactly_once(bench: Bench) {
    bench
        .provisioner
        .fail_for_serial("50E1", "certificate signing failed")
        .expect("script failure");

    let err = bench
        .service
        .create(CreateDeviceRequest::new("abc"))
        .await
        .expect_err("provisioning should fail");

    let ProvisioningError::Provision {
        device_id,
        rollback: RollbackOutcome::Deleted { attempts: 1 },
        ..
    } = err
    else {
        panic!("expected a rolled back provisioning failure");
    };
    assert_eq!(
        bench.registry.delete_requests().expect("registry state"),
        vec![device_id]
    );
    let listed = bench.service.list().await.expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn unreachable_registry_leaves_device_orphaned(bench: Bench) {
    let Bench {
        registry,
        provisioner,
        service,
        ..
    } = bench;
    provisioner
        .fail_for_serial("50E1", "certificate signing failed")
        .expect("script failure");
    registry
        .fail_next_deletes(5)
        .expect("script delete failures");
    let strict = service.with_rollback_policy(RollbackPolicy::new(2, Duration::from_millis(100), 3));

    let err = strict
        .create(CreateDeviceRequest::new("abc"))
        .await
        .expect_err("provisioning should fail");

    let orphan = err.orphaned_device().cloned().expect("device should be orphaned");
    assert_eq!(registry.delete_requests().expect("registry state").len(), 2);
    let listed = strict.list().await.expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    assert!(listed.iter().all(|device| device.id == orphan.as_str()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_name_touches_nothing(bench: Bench) {
    let err = bench
        .service
        .create(CreateDeviceRequest::new(""))
        .await
        .expect_err("blank name should fail");

    assert_eq!(err.to_string(), "device name not specified");
    assert!(err.is_user_correctable());
    assert_eq!(bench.catalog.list_calls().expect("catalog state"), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_board_reports_not_found(bench: Bench) {
    let request = CreateDeviceRequest::new("abc")
        .with_filter(BoardFilter::any().on_port("/dev/ttyUSB9"));

    let err = bench
        .service
        .create(request)
        .await
        .expect_err("no board should match");

    assert_eq!(err.to_string(), "no board found");
    let listed = bench.service.list().await.expect("listing should succeed");
    assert!(listed.is_empty());
}
