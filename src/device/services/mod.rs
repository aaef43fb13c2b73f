//! Application services for device provisioning.

mod provisioning;
mod rollback;

pub use provisioning::{
    CreateDeviceRequest, ProvisioningError, ProvisioningResult, ProvisioningService,
};
pub use rollback::{RollbackError, RollbackOutcome, RollbackPolicy};
