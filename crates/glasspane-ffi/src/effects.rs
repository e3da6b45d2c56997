//! Backdrop selection and application API.

use crate::error::{clear_last_error, set_effect_error, set_last_error};
use glasspane::{
    compute_gradient_color, compute_performance_score, compute_transparency, select_mode,
    try_apply_effect, EffectMode, EffectSettings, NativeCompositor, NativeProbe, SystemProfile,
    WindowHandle,
};
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// `forced_mode` value meaning "let the selector decide".
pub const GLASSPANE_MODE_AUTO: i32 = -1;

fn string_to_cstr(s: &str) -> *mut c_char {
    CString::new(s)
        .map(|cs| cs.into_raw())
        .unwrap_or(std::ptr::null_mut())
}

fn forced_mode_from_code(code: i32) -> Option<EffectMode> {
    if code < 0 {
        return None;
    }
    let mode = EffectMode::from_code(code);
    if mode.is_none() {
        tracing::warn!("unknown forced mode code {}, selecting automatically", code);
    }
    mode
}

/// Effect mode the selector would pick on this machine.
///
/// # Returns
/// - `0` UltimateEffect, `1` LegacyAcrylic, `2` BasicBlur, `3` NativeMica
/// - `-1` on panic
#[no_mangle]
pub extern "C" fn glasspane_select_mode() -> i32 {
    clear_last_error();

    catch_unwind(|| select_mode(&NativeProbe).code()).unwrap_or_else(|_| {
        set_last_error("panic in glasspane_select_mode");
        -1
    })
}

/// Tint transparency for a memory sample: `0.15`, `0.25` or `0.35`.
#[no_mangle]
pub extern "C" fn glasspane_compute_transparency(total_memory_bytes: u64) -> f64 {
    compute_transparency(total_memory_bytes)
}

/// Packed `0xAARRGGBB` tint for the current memory sample.
///
/// Returns `0` on panic.
#[no_mangle]
pub extern "C" fn glasspane_gradient_color(is_dark_theme: bool) -> u32 {
    clear_last_error();

    catch_unwind(|| compute_gradient_color(&NativeProbe, is_dark_theme).argb()).unwrap_or_else(
        |_| {
            set_last_error("panic in glasspane_gradient_color");
            0
        },
    )
}

/// Performance score in `[0, 100]`, or `-1` on panic.
#[no_mangle]
pub extern "C" fn glasspane_performance_score() -> i32 {
    clear_last_error();

    catch_unwind(|| compute_performance_score(&NativeProbe) as i32).unwrap_or_else(|_| {
        set_last_error("panic in glasspane_performance_score");
        -1
    })
}

/// Apply the backdrop to a window.
///
/// # Arguments
/// - `hwnd`: native window handle; `0` means the window is not realized yet
/// - `forced_mode`: mode code, or a negative value to select automatically
///
/// # Returns
/// - `true` if the compositor accepted the call
/// - `false` otherwise (call `glasspane_last_error()` for details)
#[no_mangle]
pub extern "C" fn glasspane_apply_effect(hwnd: isize, forced_mode: i32) -> bool {
    clear_last_error();

    let result = catch_unwind(|| {
        let settings = EffectSettings {
            forced_mode: forced_mode_from_code(forced_mode),
            ..Default::default()
        };
        match try_apply_effect(&WindowHandle(hwnd), &settings, &NativeProbe, &NativeCompositor) {
            Ok(_) => true,
            Err(e) => {
                set_effect_error(&e);
                false
            }
        }
    });

    result.unwrap_or_else(|_| {
        set_last_error("panic in glasspane_apply_effect");
        false
    })
}

/// Apply the backdrop using JSON settings.
///
/// `settings_json` may be null for defaults. On success `out_json` (if not
/// null) receives the applied effect as JSON, to be freed with
/// `glasspane_free_string()`.
///
/// # Returns
/// - `0` on success
/// - `-1` on error (call `glasspane_last_error()` for details)
///
/// # Safety
/// `settings_json` must be null or a valid null-terminated string.
/// `out_json` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn glasspane_apply_effect_json(
    hwnd: isize,
    settings_json: *const c_char,
    out_json: *mut *mut c_char,
) -> i32 {
    clear_last_error();

    let result = catch_unwind(AssertUnwindSafe(|| {
        let settings = if settings_json.is_null() {
            EffectSettings::default()
        } else {
            let json_str = match CStr::from_ptr(settings_json).to_str() {
                Ok(s) => s,
                Err(_) => {
                    set_last_error("invalid UTF-8 in settings_json");
                    return -1;
                }
            };
            match EffectSettings::from_json(json_str) {
                Ok(s) => s,
                Err(e) => {
                    set_effect_error(&e);
                    return -1;
                }
            }
        };

        match try_apply_effect(&WindowHandle(hwnd), &settings, &NativeProbe, &NativeCompositor) {
            Ok(applied) => {
                if !out_json.is_null() {
                    let json = serde_json::to_string(&applied).unwrap_or_else(|_| "{}".to_string());
                    *out_json = string_to_cstr(&json);
                }
                0
            }
            Err(e) => {
                set_effect_error(&e);
                -1
            }
        }
    }));

    result.unwrap_or_else(|_| {
        set_last_error("panic in glasspane_apply_effect_json");
        -1
    })
}

/// Describe the machine and the effect choices derived from it as JSON.
///
/// # Safety
/// `out_json` must be valid for writes. The string must be freed with
/// `glasspane_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn glasspane_describe_json(out_json: *mut *mut c_char) -> i32 {
    clear_last_error();

    let result = catch_unwind(AssertUnwindSafe(|| {
        if out_json.is_null() {
            set_last_error("out_json is null");
            return -1;
        }

        let profile = SystemProfile::capture(&NativeProbe);
        match serde_json::to_string(&profile) {
            Ok(json) => {
                *out_json = string_to_cstr(&json);
                0
            }
            Err(e) => {
                set_last_error(format!("serialize profile failed: {}", e));
                -1
            }
        }
    }));

    result.unwrap_or_else(|_| {
        set_last_error("panic in glasspane_describe_json");
        -1
    })
}
