//! Core types and the OS-query trait.
//!
//! The source of truth for every query is the live OS: process and window
//! tables are external shared mutable state, so nothing here caches.  The
//! [`Desktop`] trait is the single seam between the query logic and the OS;
//! production code uses `crate::win32::Win32Desktop`, tests substitute a
//! scripted desktop.

use std::time::Duration;

use serde::Serialize;

use crate::errors::WinscoutError;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// OS-assigned process identifier.  Meaningful only while the process is
/// alive; purely a lookup key.
pub type ProcessId = u32;

/// One immutable entry of a process-table snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub process_id: ProcessId,
    pub parent_process_id: ProcessId,
    pub executable_name: String,
}

/// Opaque handle to a top-level window (the raw HWND value).
///
/// Valid only as long as the window exists -- never assume a handle found in
/// one call is still live in the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WindowHandle(pub isize);

// ---------------------------------------------------------------------------
// OS query interface
// ---------------------------------------------------------------------------

/// Synchronous queries against the live desktop.
///
/// Every method is a one-shot query; implementations hold no state across
/// calls.  Per-window methods report failure through empty/`None` results
/// rather than errors: a window vanishing between enumeration and lookup is
/// an expected race, not a fault.
pub trait Desktop {
    /// Capture the process table as an owned snapshot.
    ///
    /// The underlying OS snapshot resource is released before this returns,
    /// on every path.  Fails with
    /// [`WinscoutError::SnapshotUnavailable`] when the OS cannot produce a
    /// snapshot at all.
    fn processes(&self) -> Result<Vec<ProcessRecord>, WinscoutError>;

    /// Visit every top-level window in OS enumeration order.
    ///
    /// The callback returns `false` to stop the enumeration early; a
    /// voluntary stop is not an error.  Fails with
    /// [`WinscoutError::EnumerationFailed`] only when the enumeration cannot
    /// start.
    fn enumerate_top_level(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), WinscoutError>;

    /// Owning process id of a window, or `None` for a stale handle.
    fn window_process_id(&self, window: WindowHandle) -> Option<ProcessId>;

    /// Real class name of a window; empty string on failure.
    fn window_class_name(&self, window: WindowHandle) -> String;

    /// Window title, waiting at most `timeout` for an unresponsive target.
    ///
    /// Empty string on timeout, hung target, or zero-length title.  Titles
    /// longer than the implementation's buffer are truncated, not rejected.
    fn window_text(&self, window: WindowHandle, timeout: Duration) -> String;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
