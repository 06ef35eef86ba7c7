//! Parent-process resolution over a process-table snapshot.

use crate::errors::WinscoutError;
use crate::os::{Desktop, ProcessId};

/// Find the parent process id of `process_id`.
///
/// Takes a fresh snapshot on every call and scans it linearly for the first
/// record with a matching pid -- O(number of running processes), deliberately
/// uncached because processes come and go.  Not suited to high-frequency
/// polling.
///
/// Returns `Ok(None)` when no running process has that pid, and
/// `Err(SnapshotUnavailable)` when the OS could not produce a snapshot --
/// callers can tell absence apart from an infrastructure failure.
pub fn find_parent_process_id(
    desktop: &dyn Desktop,
    process_id: ProcessId,
) -> Result<Option<ProcessId>, WinscoutError> {
    let records = desktop.processes()?;
    Ok(records
        .iter()
        .find(|r| r.process_id == process_id)
        .map(|r| r.parent_process_id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
