//! When steps for device provisioning BDD scenarios.

use super::world::{ProvisioningWorld, run_async};
use devprov::board::domain::BoardFilter;
use devprov::device::services::CreateDeviceRequest;
use rstest_bdd_macros::when;

fn create(world: &mut ProvisioningWorld, request: CreateDeviceRequest) {
    world.last_create_result = Some(run_async(world.service.create(request)));
}

#[when(r#"a device named "{name}" is created"#)]
fn device_is_created(world: &mut ProvisioningWorld, name: String) {
    create(world, CreateDeviceRequest::new(name));
}

#[when("a device with a blank name is created")]
fn device_with_blank_name_is_created(world: &mut ProvisioningWorld) {
    create(world, CreateDeviceRequest::new("   "));
}

#[when(r#"a device named "{name}" is created on port "{port}""#)]
fn device_is_created_on_port(world: &mut ProvisioningWorld, name: String, port: String) {
    create(
        world,
        CreateDeviceRequest::new(name).with_filter(BoardFilter::any().on_port(port)),
    );
}
