//! Board catalog backed by the `arduino-cli board list` command.
//!
//! Two output shapes are understood. Older releases print a JSON array of
//! ports:
//!
//! ```json
//! [{"address": "/dev/ttyACM0", "serial_number": "50E1",
//!   "boards": [{"name": "Arduino MKR1000", "fqbn": "arduino:samd:mkr1000"}]}]
//! ```
//!
//! Current releases wrap detected ports in an object:
//!
//! ```json
//! {"detected_ports": [{"port": {"address": "/dev/ttyACM0",
//!    "properties": {"serialNumber": "50E1"}},
//!   "matching_boards": [{"name": "Arduino MKR1000", "fqbn": "arduino:samd:mkr1000"}]}]}
//! ```

use crate::board::{
    domain::{BoardCandidate, DetectedPort},
    ports::{BoardCatalog, BoardCatalogError, BoardCatalogResult},
};
use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

const BOARD_LIST_ARGS: [&str; 4] = ["board", "list", "--format", "json"];

/// Board catalog that shells out to `arduino-cli`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArduinoCliBoardCatalog {
    program: Utf8PathBuf,
}

impl ArduinoCliBoardCatalog {
    /// Creates a catalog running the given `arduino-cli` executable.
    ///
    /// A bare program name is resolved through `PATH`.
    #[must_use]
    pub fn new(program: impl Into<Utf8PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Returns the executable this catalog runs.
    #[must_use]
    pub fn program(&self) -> &Utf8Path {
        &self.program
    }
}

#[async_trait]
impl BoardCatalog for ArduinoCliBoardCatalog {
    async fn list_ports(&self) -> BoardCatalogResult<Vec<DetectedPort>> {
        debug!(program = %self.program, "running board discovery");
        let output = Command::new(self.program.as_std_path())
            .args(BOARD_LIST_ARGS)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(BoardCatalogError::spawn)?;

        if !output.status.success() {
            return Err(BoardCatalogError::CommandFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        parse_board_list(&output.stdout)
    }
}

/// Decodes `arduino-cli board list --format json` output.
///
/// # Errors
///
/// Returns [`BoardCatalogError::InvalidOutput`] when the bytes are not one of
/// the understood JSON shapes.
pub fn parse_board_list(raw: &[u8]) -> BoardCatalogResult<Vec<DetectedPort>> {
    let listing: BoardListOutput =
        serde_json::from_slice(raw).map_err(BoardCatalogError::invalid_output)?;

    let ports = match listing {
        BoardListOutput::Legacy(entries) => entries.into_iter().map(LegacyPort::into_port).collect(),
        BoardListOutput::Current { detected_ports } => detected_ports
            .into_iter()
            .map(CurrentPortEntry::into_port)
            .collect(),
    };
    Ok(ports)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoardListOutput {
    Legacy(Vec<LegacyPort>),
    Current {
        #[serde(default)]
        detected_ports: Vec<CurrentPortEntry>,
    },
}

#[derive(Debug, Deserialize)]
struct RawBoard {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fqbn: String,
}

impl RawBoard {
    fn into_candidate(self) -> BoardCandidate {
        let candidate = BoardCandidate::new(self.fqbn);
        match self.name {
            Some(name) => candidate.with_name(name),
            None => candidate,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LegacyPort {
    address: String,
    #[serde(default)]
    serial_number: String,
    #[serde(default)]
    boards: Vec<RawBoard>,
}

impl LegacyPort {
    fn into_port(self) -> DetectedPort {
        DetectedPort::new(self.address, self.serial_number)
            .with_boards(self.boards.into_iter().map(RawBoard::into_candidate))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentPortEntry {
    port: CurrentPort,
    #[serde(default)]
    matching_boards: Vec<RawBoard>,
}

#[derive(Debug, Deserialize)]
struct CurrentPort {
    address: String,
    #[serde(default)]
    hardware_id: String,
    #[serde(default)]
    properties: serde_json::Map<String, serde_json::Value>,
}

impl CurrentPortEntry {
    fn into_port(self) -> DetectedPort {
        let serial_number = self.port.serial_number();
        DetectedPort::new(self.port.address, serial_number).with_boards(
            self.matching_boards
                .into_iter()
                .map(RawBoard::into_candidate),
        )
    }
}

impl CurrentPort {
    fn serial_number(&self) -> String {
        if !self.hardware_id.is_empty() {
            return self.hardware_id.clone();
        }
        self.properties
            .get("serialNumber")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_owned()
    }
}
