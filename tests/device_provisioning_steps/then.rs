//! Then steps for device provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use devprov::device::services::{ProvisioningError, RollbackOutcome};
use rstest_bdd_macros::then;

#[then(r#"the created device is named "{name}" with board type "{board}""#)]
fn created_device_matches(
    world: &ProvisioningWorld,
    name: String,
    board: String,
) -> Result<(), eyre::Report> {
    let device = world
        .last_result()?
        .as_ref()
        .map_err(|err| eyre::eyre!("create failed: {err}"))?;
    if device.name != name || device.board != board {
        return Err(eyre::eyre!("unexpected device {device:?}"));
    }
    Ok(())
}

#[then("listing devices returns {count:usize} entries")]
fn registry_lists(world: &ProvisioningWorld, count: usize) -> Result<(), eyre::Report> {
    let devices =
        run_async(world.service.list()).map_err(|err| eyre::eyre!("list failed: {err}"))?;
    if devices.len() != count {
        return Err(eyre::eyre!(
            "expected {count} devices, found {}",
            devices.len()
        ));
    }
    Ok(())
}

#[then("creation fails with a provisioning error")]
fn creation_fails_with_provisioning_error(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let result = world.last_result()?;
    if !matches!(
        result,
        Err(ProvisioningError::Provision {
            rollback: RollbackOutcome::Deleted { .. },
            ..
        })
    ) {
        return Err(eyre::eyre!("expected a rolled back provisioning error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"creation fails with "{message}""#)]
fn creation_fails_with(world: &ProvisioningWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result()? {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected failure '{message}', got {other:?}")),
    }
}

#[then("the created device was deleted once")]
fn created_device_deleted_once(world: &ProvisioningWorld) -> Result<(), eyre::Report> {
    let Some(Err(ProvisioningError::Provision { device_id, .. })) = &world.last_create_result
    else {
        return Err(eyre::eyre!("no provisioning failure recorded"));
    };
    let requests = world
        .registry
        .delete_requests()
        .map_err(|err| eyre::eyre!("cannot read delete requests: {err}"))?;
    if requests != vec![device_id.clone()] {
        return Err(eyre::eyre!("unexpected delete requests {requests:?}"));
    }
    Ok(())
}
