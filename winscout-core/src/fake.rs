//! Scripted [`Desktop`] implementation for deterministic tests.
//!
//! Single-threaded test double: call counters use `Cell`, failure modes are
//! plain bool toggles, and "stale" handles simulate windows destroyed
//! between enumeration and lookup.

use std::cell::Cell;
use std::collections::HashSet;
use std::time::Duration;

use crate::errors::WinscoutError;
use crate::os::{Desktop, ProcessId, ProcessRecord, WindowHandle};

pub(crate) struct FakeWindow {
    pub handle: WindowHandle,
    pub process_id: ProcessId,
    pub class_name: String,
    pub title: String,
    /// A hung window never answers a title read within the timeout.
    pub hung: bool,
}

#[derive(Default)]
pub(crate) struct FakeDesktop {
    pub processes: Vec<ProcessRecord>,
    pub windows: Vec<FakeWindow>,
    /// Simulate the OS refusing to produce a process snapshot.
    pub snapshot_fails: bool,
    /// Simulate the window enumeration failing to start.
    pub enumeration_fails: bool,
    /// Handles that vanished between enumeration and per-window lookup.
    pub stale_windows: HashSet<WindowHandle>,
    /// Number of title reads performed, for short-circuit assertions.
    pub title_reads: Cell<usize>,
    /// Number of windows handed to the enumeration callback.
    pub windows_visited: Cell<usize>,
}

impl FakeDesktop {
    pub fn with_process(
        mut self,
        process_id: ProcessId,
        parent_process_id: ProcessId,
        executable_name: &str,
    ) -> Self {
        self.processes.push(ProcessRecord {
            process_id,
            parent_process_id,
            executable_name: executable_name.to_owned(),
        });
        self
    }

    pub fn with_window(
        mut self,
        handle: isize,
        process_id: ProcessId,
        class_name: &str,
        title: &str,
    ) -> Self {
        self.windows.push(FakeWindow {
            handle: WindowHandle(handle),
            process_id,
            class_name: class_name.to_owned(),
            title: title.to_owned(),
            hung: false,
        });
        self
    }

    pub fn with_hung_window(
        mut self,
        handle: isize,
        process_id: ProcessId,
        class_name: &str,
        title: &str,
    ) -> Self {
        self.windows.push(FakeWindow {
            handle: WindowHandle(handle),
            process_id,
            class_name: class_name.to_owned(),
            title: title.to_owned(),
            hung: true,
        });
        self
    }

    fn lookup(&self, window: WindowHandle) -> Option<&FakeWindow> {
        if self.stale_windows.contains(&window) {
            return None;
        }
        self.windows.iter().find(|w| w.handle == window)
    }
}

impl Desktop for FakeDesktop {
    fn processes(&self) -> Result<Vec<ProcessRecord>, WinscoutError> {
        if self.snapshot_fails {
            return Err(WinscoutError::SnapshotUnavailable(
                "simulated snapshot failure".into(),
            ));
        }
        Ok(self.processes.clone())
    }

    fn enumerate_top_level(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), WinscoutError> {
        if self.enumeration_fails {
            return Err(WinscoutError::EnumerationFailed(
                "simulated enumeration failure".into(),
            ));
        }
        for window in &self.windows {
            self.windows_visited.set(self.windows_visited.get() + 1);
            if !visit(window.handle) {
                break;
            }
        }
        Ok(())
    }

    fn window_process_id(&self, window: WindowHandle) -> Option<ProcessId> {
        self.lookup(window).map(|w| w.process_id)
    }

    fn window_class_name(&self, window: WindowHandle) -> String {
        self.lookup(window)
            .map(|w| w.class_name.clone())
            .unwrap_or_default()
    }

    fn window_text(&self, window: WindowHandle, _timeout: Duration) -> String {
        self.title_reads.set(self.title_reads.get() + 1);
        match self.lookup(window) {
            Some(w) if !w.hung => w.title.clone(),
            _ => String::new(),
        }
    }
}
