//! Given steps for device provisioning BDD scenarios.

use super::world::ProvisioningWorld;
use devprov::board::domain::{BoardCandidate, DetectedPort};
use rstest_bdd_macros::given;

#[given(r#"a board "{fqbn}" with serial "{serial}" on port "{port}""#)]
fn a_board_on_port(
    world: &mut ProvisioningWorld,
    fqbn: String,
    serial: String,
    port: String,
) -> Result<(), eyre::Report> {
    world
        .attached
        .push(DetectedPort::new(port, serial).with_board(BoardCandidate::new(fqbn)));
    world
        .catalog
        .set_ports(world.attached.clone())
        .map_err(|err| eyre::eyre!("cannot attach board: {err}"))
}

#[given(r#"provisioning fails for serial "{serial}""#)]
fn provisioning_fails_for(
    world: &mut ProvisioningWorld,
    serial: String,
) -> Result<(), eyre::Report> {
    world
        .provisioner
        .fail_for_serial(serial, "secure element locked")
        .map_err(|err| eyre::eyre!("cannot script provisioning failure: {err}"))
}
