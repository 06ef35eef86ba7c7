//! Top-level window discovery: criteria matching, enumeration, bounded
//! title reads, and the toolkit handle bridge.
//!
//! Matching is cheapest-first: owning-pid and class-name lookups are
//! hang-free synchronous queries, while reading a title can stall on an
//! unresponsive peer, so the title check runs last and is always bounded by
//! a timeout.

use std::time::Duration;

use crate::errors::WinscoutError;
use crate::os::{Desktop, ProcessId, WindowHandle};

/// Default wait for a title read from an unresponsive window.
pub const DEFAULT_TITLE_TIMEOUT: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Criteria for [`find_windows`].  Absent fields are wildcards.
///
/// Constructed per query and consumed by one enumeration call; nothing here
/// outlives the windows it matched against.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    /// Only match windows owned by this process id.
    pub process_id: Option<ProcessId>,
    /// Exact match on the window's real class name.
    pub class_name: Option<String>,
    /// Case-sensitive substring match on the window title.
    pub title_substring: Option<String>,
    /// Stop enumerating as soon as one window matches.
    pub stop_at_first_match: bool,
    /// Per-window bound on the title read.
    pub title_timeout: Duration,
}

impl Default for MatchCriteria {
    fn default() -> Self {
        Self {
            process_id: None,
            class_name: None,
            title_substring: None,
            stop_at_first_match: true,
            title_timeout: DEFAULT_TITLE_TIMEOUT,
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Read a window's title, waiting at most `timeout`.
///
/// Returns an empty string on timeout, a hung target, or a zero-length
/// title -- all expected outcomes, never errors.
pub fn read_window_title(
    desktop: &dyn Desktop,
    window: WindowHandle,
    timeout: Duration,
) -> String {
    desktop.window_text(window, timeout)
}

/// Evaluate `criteria` against one candidate window.
///
/// Checks run cheapest-first with short-circuiting: (1) owning pid,
/// (2) class name, (3) bounded title read.  A criteria set that is all
/// wildcards matches every window.  Lookup failures on the candidate (e.g.
/// it was destroyed mid-enumeration) evaluate as non-matches.
pub fn window_matches(
    desktop: &dyn Desktop,
    window: WindowHandle,
    criteria: &MatchCriteria,
) -> bool {
    if let Some(pid) = criteria.process_id {
        if desktop.window_process_id(window) != Some(pid) {
            return false;
        }
    }
    if let Some(ref class_name) = criteria.class_name {
        if desktop.window_class_name(window) != *class_name {
            return false;
        }
    }
    if let Some(ref needle) = criteria.title_substring {
        if !read_window_title(desktop, window, criteria.title_timeout).contains(needle.as_str()) {
            return false;
        }
    }
    true
}

/// Find top-level windows matching `criteria`.
///
/// Candidates are visited and collected in OS enumeration order; callers
/// must not assume any particular ordering beyond that.  With
/// `stop_at_first_match` set, enumeration terminates right after the first
/// match.  Fails with [`WinscoutError::EnumerationFailed`] only when the OS
/// enumeration cannot start; per-candidate failures are absorbed by
/// [`window_matches`].
pub fn find_windows(
    desktop: &dyn Desktop,
    criteria: &MatchCriteria,
) -> Result<Vec<WindowHandle>, WinscoutError> {
    let mut found: Vec<WindowHandle> = Vec::new();
    desktop.enumerate_top_level(&mut |window| {
        if window_matches(desktop, window, criteria) {
            found.push(window);
            if criteria.stop_at_first_match {
                return false;
            }
        }
        true
    })?;
    Ok(found)
}

/// Reinterpret a foreign UI-toolkit window id (e.g. a Qt `WId`) as a native
/// [`WindowHandle`].
///
/// Identity conversion; no validation is possible at this boundary.  The
/// caller must guarantee the id names a live window of the current process --
/// a stale or foreign id is undefined at the OS level.
pub fn native_handle(toolkit_widget_id: usize) -> WindowHandle {
    WindowHandle(toolkit_widget_id as isize)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
