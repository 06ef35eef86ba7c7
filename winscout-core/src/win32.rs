//! `Win32Desktop` -- the live-OS implementation of [`Desktop`].
//!
//! Process snapshots come from the Toolhelp32 API; the snapshot handle is
//! held in an RAII guard so `CloseHandle` runs on every exit path.  Window
//! enumeration uses `EnumWindows` with a trampoline callback that carries an
//! explicit state struct through `LPARAM`.  Title reads go through
//! `SendMessageTimeoutW` with `SMTO_ABORTIFHUNG`, so a hung window costs at
//! most the caller's timeout.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::time::Duration;

use windows::Win32::Foundation::{CloseHandle, BOOL, FALSE, HANDLE, HWND, LPARAM, TRUE, WPARAM};
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, Process32FirstW, Process32NextW, PROCESSENTRY32W,
    TH32CS_SNAPPROCESS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowThreadProcessId, RealGetWindowClassW, SendMessageTimeoutW,
    SMTO_ABORTIFHUNG, SMTO_BLOCK, WM_GETTEXT,
};

use crate::errors::WinscoutError;
use crate::os::{Desktop, ProcessId, ProcessRecord, WindowHandle};

/// Title read buffer, in UTF-16 code units.  Longer titles are truncated.
const TITLE_BUFFER_LEN: usize = 1024;

/// Class name buffer, in UTF-16 code units.
const CLASS_BUFFER_LEN: usize = 256;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn hwnd(window: WindowHandle) -> HWND {
    HWND(window.0 as *mut core::ffi::c_void)
}

/// Decode a fixed-size NUL-terminated UTF-16 buffer (e.g. `szExeFile`).
fn wide_cstr_to_string(buf: &[u16]) -> String {
    let end = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..end])
}

/// RAII wrapper for a Toolhelp32 snapshot handle.
///
/// Constructed only from a successfully created snapshot, so `Drop` always
/// has a real handle to close.
struct SnapshotGuard(HANDLE);

impl Drop for SnapshotGuard {
    fn drop(&mut self) {
        let _ = unsafe { CloseHandle(self.0) };
    }
}

/// State handed to the `EnumWindows` trampoline through `LPARAM`.
struct EnumState<'a> {
    visit: &'a mut dyn FnMut(WindowHandle) -> bool,
    stopped: bool,
}

/// Callback for `EnumWindows`: forwards each window to the visitor and
/// records when the visitor asks to stop.
unsafe extern "system" fn enum_callback(handle: HWND, lparam: LPARAM) -> BOOL {
    let state = unsafe { &mut *(lparam.0 as *mut EnumState) };
    if (state.visit)(WindowHandle(handle.0 as isize)) {
        TRUE
    } else {
        state.stopped = true;
        FALSE
    }
}

// ---------------------------------------------------------------------------
// Desktop implementation
// ---------------------------------------------------------------------------

/// Live-OS [`Desktop`] backed by Win32 calls.  Stateless; construct freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Desktop;

impl Desktop for Win32Desktop {
    fn processes(&self) -> Result<Vec<ProcessRecord>, WinscoutError> {
        let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }.map_err(
            |e| WinscoutError::SnapshotUnavailable(format!("CreateToolhelp32Snapshot failed: {e}")),
        )?;
        let guard = SnapshotGuard(snapshot);

        let mut entry = PROCESSENTRY32W {
            dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
            ..Default::default()
        };

        let mut records: Vec<ProcessRecord> = Vec::with_capacity(256);
        if let Err(e) = unsafe { Process32FirstW(guard.0, &mut entry) } {
            // ERROR_NO_MORE_FILES: the table really is empty.  The snapshot
            // itself was produced, so this is not SnapshotUnavailable.
            log::debug!("Process32FirstW: {e}");
            return Ok(records);
        }
        loop {
            records.push(ProcessRecord {
                process_id: entry.th32ProcessID,
                parent_process_id: entry.th32ParentProcessID,
                executable_name: wide_cstr_to_string(&entry.szExeFile),
            });
            if unsafe { Process32NextW(guard.0, &mut entry) }.is_err() {
                break;
            }
        }
        Ok(records)
    }

    fn enumerate_top_level(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> bool,
    ) -> Result<(), WinscoutError> {
        let mut state = EnumState {
            visit,
            stopped: false,
        };
        let result = unsafe {
            EnumWindows(
                Some(enum_callback),
                LPARAM(&mut state as *mut EnumState as isize),
            )
        };
        match result {
            Ok(()) => Ok(()),
            // EnumWindows reports failure when the callback returns FALSE;
            // a voluntary stop is success, not EnumerationFailed.
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(WinscoutError::EnumerationFailed(format!(
                "EnumWindows failed: {e}"
            ))),
        }
    }

    fn window_process_id(&self, window: WindowHandle) -> Option<ProcessId> {
        let mut pid: u32 = 0;
        let thread_id = unsafe { GetWindowThreadProcessId(hwnd(window), Some(&mut pid)) };
        if thread_id == 0 || pid == 0 {
            None
        } else {
            Some(pid)
        }
    }

    fn window_class_name(&self, window: WindowHandle) -> String {
        let mut buf = [0u16; CLASS_BUFFER_LEN];
        let len = unsafe { RealGetWindowClassW(hwnd(window), &mut buf) };
        if len == 0 {
            return String::new();
        }
        OsString::from_wide(&buf[..len as usize])
            .to_string_lossy()
            .into_owned()
    }

    fn window_text(&self, window: WindowHandle, timeout: Duration) -> String {
        let mut buf = [0u16; TITLE_BUFFER_LEN];
        let mut copied: usize = 0;
        let status = unsafe {
            SendMessageTimeoutW(
                hwnd(window),
                WM_GETTEXT,
                WPARAM(buf.len()),
                LPARAM(buf.as_mut_ptr() as isize),
                SMTO_ABORTIFHUNG | SMTO_BLOCK,
                timeout.as_millis().min(u32::MAX as u128) as u32,
                Some(&mut copied),
            )
        };
        // Zero status covers timeout and hung targets alike; both fold into
        // "no title available".
        if status.0 == 0 || copied == 0 {
            return String::new();
        }
        let copied = copied.min(buf.len() - 1);
        OsString::from_wide(&buf[..copied])
            .to_string_lossy()
            .into_owned()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
