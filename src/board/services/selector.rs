//! Pure selection of one board out of the detected ports.

use crate::board::domain::{
    BoardCandidate, BoardDomainError, BoardFilter, DetectedPort, Fqbn, ScanPolicy, SelectedBoard,
};
use thiserror::Error;

/// Errors returned by [`select_board`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardSelectionError {
    /// No detected board satisfies the filters.
    #[error("no board found")]
    NotFound,

    /// The matching candidate violates a board invariant, which points at a
    /// bug in the discovery source.
    #[error(transparent)]
    InvalidBoard(#[from] BoardDomainError),
}

/// Selects at most one board from `ports` according to `filter`.
///
/// Ports are visited in the given order. A port is skipped when it has no
/// candidate boards or when the port filter names a different address. On
/// the first remaining port the first candidate is taken, or, with an FQBN
/// filter, the first candidate whose FQBN equals it exactly. Under
/// [`ScanPolicy::FirstCandidatePort`] a port without a match ends the search;
/// under [`ScanPolicy::ContinueScanning`] the next port is tried.
///
/// # Errors
///
/// Returns [`BoardSelectionError::NotFound`] when nothing matches and
/// [`BoardSelectionError::InvalidBoard`] when the matching candidate has a
/// malformed FQBN or its port lacks an address or serial number.
pub fn select_board(
    ports: &[DetectedPort],
    filter: &BoardFilter,
) -> Result<SelectedBoard, BoardSelectionError> {
    for port in ports.iter().filter(|port| !is_skipped(port, filter)) {
        if let Some(candidate) = matching_candidate(port.boards(), filter.fqbn()) {
            return board_from(port, candidate).map_err(BoardSelectionError::from);
        }
        if filter.scan_policy() == ScanPolicy::FirstCandidatePort {
            break;
        }
    }
    Err(BoardSelectionError::NotFound)
}

fn is_skipped(port: &DetectedPort, filter: &BoardFilter) -> bool {
    port.boards().is_empty() || filter.port().is_some_and(|address| address != port.address())
}

fn matching_candidate<'a>(
    boards: &'a [BoardCandidate],
    fqbn: Option<&str>,
) -> Option<&'a BoardCandidate> {
    match fqbn {
        Some(wanted) => boards.iter().find(|board| board.fqbn() == wanted),
        None => boards.first(),
    }
}

fn board_from(
    port: &DetectedPort,
    candidate: &BoardCandidate,
) -> Result<SelectedBoard, BoardDomainError> {
    let fqbn = Fqbn::new(candidate.fqbn())?;
    SelectedBoard::new(fqbn, port.serial_number(), port.address())
}
