//! `winscout_core` -- window discovery and process ancestry for Windows.
//!
//! This crate contains all business logic with no CLI dependency.  It is
//! consumed by the `winscout-cli` bins and by host engines that need to
//! locate an application's windows before embedding their own UI next to
//! them.
//!
//! All OS access goes through the [`os::Desktop`] trait, so every query can
//! be exercised against a simulated desktop in tests.  The real
//! implementation, `win32::Win32Desktop`, is only compiled on Windows.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | `WinscoutError` enum via `thiserror` |
//! | [`os`] | Core types and the `Desktop` OS-query trait |
//! | `win32` | `Win32Desktop`: Toolhelp32 + EnumWindows implementation |
//! | [`process`] | Parent-process resolution over a process snapshot |
//! | [`window`] | Criteria matching, enumeration, bounded title reads |

pub mod errors;
pub mod os;
pub mod process;
pub mod window;

#[cfg(windows)]
pub mod win32;

#[cfg(test)]
pub(crate) mod fake;
