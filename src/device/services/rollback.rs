//! Deletion of a registry record after failed provisioning.
//!
//! The default policy makes a single delete attempt. Bounded retry with
//! exponential backoff is opt-in through [`RollbackPolicy::new`].

use crate::device::{
    domain::DeviceId,
    ports::{DeviceRegistry, DeviceRegistryError},
};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// How hard the coordinator tries to delete a device whose provisioning
/// failed.
///
/// The delay before attempt `n + 1` is `initial_backoff * multiplier^(n - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollbackPolicy {
    max_attempts: u32,
    initial_backoff: Duration,
    backoff_multiplier: u32,
}

impl RollbackPolicy {
    /// Creates a policy. `max_attempts` and `backoff_multiplier` are raised
    /// to at least one.
    #[must_use]
    pub fn new(max_attempts: u32, initial_backoff: Duration, backoff_multiplier: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
            backoff_multiplier: backoff_multiplier.max(1),
        }
    }

    /// A single delete attempt with no retry.
    #[must_use]
    pub const fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            backoff_multiplier: 1,
        }
    }

    /// Returns the maximum number of delete attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the delay before the second attempt.
    #[must_use]
    pub const fn initial_backoff(&self) -> Duration {
        self.initial_backoff
    }

    /// Returns the factor applied to the delay after each failed attempt.
    #[must_use]
    pub const fn backoff_multiplier(&self) -> u32 {
        self.backoff_multiplier
    }

    /// Returns the delay to wait after failed attempt number `attempt`
    /// (1-based).
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = self
            .backoff_multiplier
            .saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff.saturating_mul(factor)
    }
}

impl Default for RollbackPolicy {
    fn default() -> Self {
        Self::single_attempt()
    }
}

/// The registry still holds a device that should have been rolled back.
#[derive(Debug, Clone, Error)]
#[error("cannot delete device {device_id} after {attempts} attempt(s)")]
pub struct RollbackError {
    device_id: DeviceId,
    attempts: u32,
    #[source]
    last_error: DeviceRegistryError,
}

impl RollbackError {
    /// Returns the identifier of the orphaned device.
    #[must_use]
    pub const fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    /// Returns how many delete attempts were made.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Returns the error of the last delete attempt.
    #[must_use]
    pub const fn last_error(&self) -> &DeviceRegistryError {
        &self.last_error
    }
}

/// Result of rolling back a device registration.
#[derive(Debug, Clone)]
pub enum RollbackOutcome {
    /// The registry no longer holds the device.
    Deleted {
        /// Delete attempts made, the successful one included.
        attempts: u32,
    },
    /// Every attempt failed; the device is orphaned in the registry.
    Failed(Box<RollbackError>),
}

impl RollbackOutcome {
    /// Returns `true` when the registry no longer holds the device.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Deletes `device_id` under `policy`.
///
/// A `NotFound` answer counts as deleted.
pub(crate) async fn roll_back<R>(
    registry: &R,
    device_id: &DeviceId,
    policy: &RollbackPolicy,
) -> RollbackOutcome
where
    R: DeviceRegistry + ?Sized,
{
    let mut attempt: u32 = 1;
    loop {
        match registry.delete(device_id).await {
            Ok(()) | Err(DeviceRegistryError::NotFound(_)) => {
                return RollbackOutcome::Deleted { attempts: attempt };
            }
            Err(last_error) if attempt >= policy.max_attempts() => {
                return RollbackOutcome::Failed(Box::new(RollbackError {
                    device_id: device_id.clone(),
                    attempts: attempt,
                    last_error,
                }));
            }
            Err(err) => {
                let delay = policy.delay_after(attempt);
                warn!(
                    device_id = %device_id,
                    attempt,
                    retry_in = ?delay,
                    error = %err,
                    "rollback delete failed"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
