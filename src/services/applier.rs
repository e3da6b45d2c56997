//! Backdrop application through the compositor
//!
//! The mode and tint are resolved and reported, but the compositor call is
//! always the same full-frame extension. Wiring the mode into the native call
//! is not done yet; callers must not rely on the mode changing what is drawn.

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

use super::selector::{compute_gradient_color, resolve_dark_theme, select_mode};
use crate::models::{EffectMode, EffectSettings, GradientColor, Margins, ThemeMode, WindowHandle};
use crate::platform::{Compositor, NativeWindow, SystemProbe, S_OK};
use crate::utils::error::{EffectError, EffectResult};

/// What was resolved for a successful application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedEffect {
    pub hwnd: WindowHandle,
    pub mode: EffectMode,
    pub dark_theme: bool,
    pub gradient: GradientColor,
}

/// Apply the backdrop, reporting why it failed.
pub fn try_apply_effect<W, P, C>(
    window: &W,
    settings: &EffectSettings,
    probe: &P,
    compositor: &C,
) -> EffectResult<AppliedEffect>
where
    W: NativeWindow + ?Sized,
    P: SystemProbe + ?Sized,
    C: Compositor + ?Sized,
{
    let hwnd = window.native_handle();
    if hwnd.is_null() {
        return Err(EffectError::NullWindowHandle);
    }

    let mode = settings.forced_mode.unwrap_or_else(|| select_mode(probe));
    let dark_theme = resolve_dark_theme(probe, settings.theme);
    let gradient = compute_gradient_color(probe, dark_theme);
    tracing::debug!(hwnd = hwnd.0, %mode, dark_theme, %gradient, "resolved backdrop");

    let status = catch_unwind(AssertUnwindSafe(|| {
        compositor.extend_frame_into_client_area(hwnd, Margins::FULL)
    }))
    .map_err(|payload| EffectError::CompositorPanic(panic_message(payload.as_ref())))?;

    if status != S_OK {
        return Err(EffectError::Compositor(status));
    }

    tracing::info!(hwnd = hwnd.0, %mode, "backdrop applied");
    Ok(AppliedEffect {
        hwnd,
        mode,
        dark_theme,
        gradient,
    })
}

/// Apply the backdrop. `false` on any failure; never panics.
pub fn apply_effect<W, P, C>(
    window: &W,
    forced_mode: Option<EffectMode>,
    probe: &P,
    compositor: &C,
) -> bool
where
    W: NativeWindow + ?Sized,
    P: SystemProbe + ?Sized,
    C: Compositor + ?Sized,
{
    let settings = EffectSettings {
        forced_mode,
        theme: ThemeMode::System,
    };

    match try_apply_effect(window, &settings, probe, compositor) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("backdrop not applied: {}", e);
            false
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("unknown panic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedProbe, OsVersion};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingCompositor {
        status: i32,
        calls: AtomicUsize,
        last_margins: Mutex<Option<Margins>>,
    }

    impl RecordingCompositor {
        fn returning(status: i32) -> Self {
            Self {
                status,
                calls: AtomicUsize::new(0),
                last_margins: Mutex::new(None),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Compositor for RecordingCompositor {
        fn extend_frame_into_client_area(&self, _hwnd: WindowHandle, margins: Margins) -> i32 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_margins.lock().unwrap() = Some(margins);
            self.status
        }
    }

    struct PanickingCompositor;

    impl Compositor for PanickingCompositor {
        fn extend_frame_into_client_area(&self, _hwnd: WindowHandle, _margins: Margins) -> i32 {
            panic!("dwmapi unavailable");
        }
    }

    fn win11() -> FixedProbe {
        FixedProbe {
            os: OsVersion::new(10, 0, 22631),
            total_memory_bytes: 16_000_000_000,
            logical_processors: 8,
        }
    }

    #[test]
    fn test_null_handle_skips_compositor() {
        let compositor = RecordingCompositor::returning(S_OK);
        assert!(!apply_effect(&WindowHandle::NULL, None, &win11(), &compositor));
        assert_eq!(compositor.calls(), 0);

        let err = try_apply_effect(
            &WindowHandle::NULL,
            &EffectSettings::default(),
            &win11(),
            &compositor,
        )
        .unwrap_err();
        assert!(matches!(err, EffectError::NullWindowHandle));
        assert_eq!(compositor.calls(), 0);
    }

    #[test]
    fn test_success_status_applies_with_full_margins() {
        let compositor = RecordingCompositor::returning(S_OK);
        assert!(apply_effect(&WindowHandle(0x1000), None, &win11(), &compositor));
        assert_eq!(compositor.calls(), 1);
        assert_eq!(*compositor.last_margins.lock().unwrap(), Some(Margins::FULL));
    }

    #[test]
    fn test_failure_status_is_false() {
        let compositor = RecordingCompositor::returning(0x8007_0578u32 as i32);
        assert!(!apply_effect(&WindowHandle(0x1000), None, &win11(), &compositor));
        assert_eq!(compositor.calls(), 1);

        let err = try_apply_effect(
            &WindowHandle(0x1000),
            &EffectSettings::default(),
            &win11(),
            &compositor,
        )
        .unwrap_err();
        assert!(matches!(err, EffectError::Compositor(s) if s == 0x8007_0578u32 as i32));
    }

    #[test]
    fn test_positive_status_is_not_success() {
        // S_FALSE is a success HRESULT but not the success sentinel
        let compositor = RecordingCompositor::returning(1);
        assert!(!apply_effect(&WindowHandle(0x1000), None, &win11(), &compositor));
    }

    #[test]
    fn test_panicking_compositor_is_contained() {
        assert!(!apply_effect(&WindowHandle(0x1000), None, &win11(), &PanickingCompositor));

        let err = try_apply_effect(
            &WindowHandle(0x1000),
            &EffectSettings::default(),
            &win11(),
            &PanickingCompositor,
        )
        .unwrap_err();
        match err {
            EffectError::CompositorPanic(msg) => assert_eq!(msg, "dwmapi unavailable"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_forced_mode_overrides_selection() {
        let compositor = RecordingCompositor::returning(S_OK);
        let settings = EffectSettings {
            forced_mode: Some(EffectMode::BasicBlur),
            theme: ThemeMode::System,
        };
        let applied =
            try_apply_effect(&WindowHandle(0x1000), &settings, &win11(), &compositor).unwrap();
        assert_eq!(applied.mode, EffectMode::BasicBlur);
    }

    #[test]
    fn test_mode_does_not_change_native_call() {
        let mica = RecordingCompositor::returning(S_OK);
        let blur = RecordingCompositor::returning(S_OK);
        assert!(apply_effect(&WindowHandle(1), None, &win11(), &mica));
        assert!(apply_effect(&WindowHandle(1), Some(EffectMode::BasicBlur), &win11(), &blur));
        assert_eq!(*mica.last_margins.lock().unwrap(), *blur.last_margins.lock().unwrap());
    }

    #[test]
    fn test_applied_effect_reports_theme_and_tint() {
        let compositor = RecordingCompositor::returning(S_OK);
        let applied = try_apply_effect(
            &WindowHandle(0x1000),
            &EffectSettings::default(),
            &win11(),
            &compositor,
        )
        .unwrap();
        assert_eq!(applied.mode, EffectMode::NativeMica);
        assert!(applied.dark_theme);
        assert_eq!(applied.gradient.argb(), 0x2630_1934);

        let light = EffectSettings {
            forced_mode: None,
            theme: ThemeMode::Light,
        };
        let applied = try_apply_effect(&WindowHandle(0x1000), &light, &win11(), &compositor).unwrap();
        assert!(!applied.dark_theme);
        assert_eq!(applied.gradient.rgb(), 0xF5_F5F5);
    }
}
