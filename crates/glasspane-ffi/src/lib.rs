//! Glasspane FFI - C ABI interface for native window hosts.
//!
//! Lets a non-Rust host (WPF, Qt, plain Win32) pick and apply a backdrop for
//! its window by passing the raw `HWND`.
//!
//! # Usage
//!
//! 1. Optionally call `glasspane_init_logging()` once
//! 2. Once the window has a handle, call `glasspane_apply_effect(hwnd, -1)`
//! 3. Query `glasspane_select_mode()` / `glasspane_gradient_color()` to style
//!    the client area to match
//!
//! # Error Handling
//!
//! Boolean functions return `false` and integer functions return `-1` on
//! error. Call `glasspane_last_error()` to get the message.
//!
//! # Memory Management
//!
//! Strings returned via `out_json` or `glasspane_version()` must be freed with
//! `glasspane_free_string()`.

mod effects;
mod error;

use error::{clear_last_error, last_error_ptr, set_effect_error, set_last_error};
use glasspane::logging::{default_log_dir, init_logging, WorkerGuard};
use parking_lot::Mutex;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;

// Re-export all public FFI functions
pub use effects::*;

/// Keeps the rolling file writer flushing for the life of the process.
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

/// Install logging to console and a daily rolling file.
///
/// `log_dir` may be null to use `%APPDATA%/Glasspane/Logs`.
///
/// # Returns
/// - `0` on success
/// - `-1` on error, including when logging was already initialized
///
/// # Safety
/// `log_dir` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn glasspane_init_logging(log_dir: *const c_char) -> i32 {
    clear_last_error();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let dir = if log_dir.is_null() {
            default_log_dir()
        } else {
            match CStr::from_ptr(log_dir).to_str() {
                Ok(s) => PathBuf::from(s),
                Err(_) => {
                    set_last_error("invalid UTF-8 in log_dir");
                    return -1;
                }
            }
        };

        match init_logging(Some(&dir)) {
            Ok(guard) => {
                *LOG_GUARD.lock() = guard;
                tracing::info!("Glasspane FFI {} initialized", env!("CARGO_PKG_VERSION"));
                0
            }
            Err(e) => {
                set_effect_error(&e);
                -1
            }
        }
    }));

    result.unwrap_or_else(|_| {
        set_last_error("panic in glasspane_init_logging");
        -1
    })
}

/// Get the last error message.
///
/// # Returns
/// - Pointer to error message (valid until next FFI call on this thread)
/// - `NULL` if no error
#[no_mangle]
pub extern "C" fn glasspane_last_error() -> *const c_char {
    last_error_ptr()
}

/// Free a string allocated by the library.
///
/// # Safety
/// - `s` must be a pointer returned by a glasspane function
/// - After calling this function, the pointer is invalid
#[no_mangle]
pub unsafe extern "C" fn glasspane_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Get the library version.
///
/// # Returns
/// - Version string (must be freed with `glasspane_free_string()`)
#[no_mangle]
pub extern "C" fn glasspane_version() -> *mut c_char {
    CString::new(env!("CARGO_PKG_VERSION"))
        .map(|cs| cs.into_raw())
        .unwrap_or(std::ptr::null_mut())
}
