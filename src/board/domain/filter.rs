//! Caller-supplied criteria for board selection.

use serde::{Deserialize, Serialize};

/// How far the selector searches when an FQBN filter is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Only the first port that has candidate boards (and passes the port
    /// filter) is searched. A port whose candidates do not match the FQBN
    /// filter ends the search.
    #[default]
    FirstCandidatePort,
    /// Ports are searched in order until a candidate matches.
    ContinueScanning,
}

/// Optional port and FQBN filters applied during selection.
///
/// An empty filter selects the first candidate of the first port that has
/// any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardFilter {
    port: Option<String>,
    fqbn: Option<String>,
    scan: ScanPolicy,
}

impl BoardFilter {
    /// Creates a filter that accepts any board.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts selection to the port with the given address.
    #[must_use]
    pub fn on_port(mut self, address: impl Into<String>) -> Self {
        self.port = Some(address.into());
        self
    }

    /// Restricts selection to candidates with exactly this FQBN.
    #[must_use]
    pub fn with_fqbn(mut self, fqbn: impl Into<String>) -> Self {
        self.fqbn = Some(fqbn.into());
        self
    }

    /// Sets the scan policy.
    #[must_use]
    pub const fn with_scan_policy(mut self, scan: ScanPolicy) -> Self {
        self.scan = scan;
        self
    }

    /// Returns the port address filter, if any.
    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    /// Returns the FQBN filter, if any.
    #[must_use]
    pub fn fqbn(&self) -> Option<&str> {
        self.fqbn.as_deref()
    }

    /// Returns the scan policy.
    #[must_use]
    pub const fn scan_policy(&self) -> ScanPolicy {
        self.scan
    }
}
