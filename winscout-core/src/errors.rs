//! Error types for `winscout_core`.
//!
//! Only failures to *start* an OS query are errors.  Expected empty results
//! ("no such process", "no window matched") are `Ok(None)` / empty vectors,
//! and per-candidate races (a window destroyed mid-enumeration, a hung
//! window timing out on a title read) are absorbed as non-matches -- callers
//! must be able to tell "absent" apart from "could not ask the OS".

use thiserror::Error;

/// Top-level error type for the `winscout_core` library.
#[derive(Debug, Error)]
pub enum WinscoutError {
    /// The OS refused to produce a process snapshot (resource exhaustion,
    /// permission).  Distinct from "process not found".
    #[error("SnapshotUnavailable: {0}")]
    SnapshotUnavailable(String),

    /// The top-level window enumeration could not start.  Per-window lookup
    /// failures during an enumeration are not reported through this variant.
    #[error("EnumerationFailed: {0}")]
    EnumerationFailed(String),
}
