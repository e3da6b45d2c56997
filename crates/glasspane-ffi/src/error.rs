//! Per-thread "last error" slot read back by C callers.

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;

use glasspane::EffectError;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

pub fn set_last_error(msg: impl Into<String>) {
    let msg = msg.into();
    tracing::error!("FFI error: {}", msg);
    // Interior NULs would make CString fail; strip them rather than lose the message
    let msg = msg.replace('\0', " ");
    LAST_ERROR.with(|slot| *slot.borrow_mut() = CString::new(msg).ok());
}

/// Record an effect failure as `E_CODE: message`.
pub fn set_effect_error(err: &EffectError) {
    set_last_error(format!("{}: {}", err.code(), err));
}

pub fn clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// Null when no error is set. Valid until the next FFI call on this thread.
pub fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |s| s.as_ptr())
    })
}

#[cfg(test)]
pub fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|s| s.to_string_lossy().into_owned())
    })
}
