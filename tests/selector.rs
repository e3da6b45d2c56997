use std::sync::atomic::{AtomicUsize, Ordering};

use glasspane::{
    apply_effect, compute_gradient_color, compute_performance_score, compute_transparency,
    select_mode, try_apply_effect, Compositor, EffectError, EffectMode, EffectSettings,
    FixedProbe, Margins, NativeWindow, OsVersion, SystemProfile, WindowHandle, S_OK,
};

/// Host window that is realized only after `show`.
struct HostWindow {
    hwnd: Option<isize>,
}

impl NativeWindow for HostWindow {
    fn native_handle(&self) -> WindowHandle {
        self.hwnd.map(WindowHandle).unwrap_or(WindowHandle::NULL)
    }
}

#[derive(Default)]
struct CountingCompositor {
    calls: AtomicUsize,
}

impl Compositor for CountingCompositor {
    fn extend_frame_into_client_area(&self, hwnd: WindowHandle, margins: Margins) -> i32 {
        assert!(!hwnd.is_null());
        assert_eq!(margins, Margins::FULL);
        self.calls.fetch_add(1, Ordering::SeqCst);
        S_OK
    }
}

fn machine(build: u32, memory: u64, cores: usize) -> FixedProbe {
    FixedProbe {
        os: OsVersion::new(10, 0, build),
        total_memory_bytes: memory,
        logical_processors: cores,
    }
}

#[test]
fn unrealized_window_then_realized_window() {
    let probe = machine(22631, 16_000_000_000, 12);
    let compositor = CountingCompositor::default();

    let mut window = HostWindow { hwnd: None };
    assert!(!apply_effect(&window, None, &probe, &compositor));
    assert_eq!(compositor.calls.load(Ordering::SeqCst), 0);

    window.hwnd = Some(0x0002_04A6);
    assert!(apply_effect(&window, None, &probe, &compositor));
    assert_eq!(compositor.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn older_windows_gets_a_weaker_effect_and_score() {
    let probe = machine(17134, 3_500_000_000, 4);

    assert_eq!(select_mode(&probe), EffectMode::LegacyAcrylic);
    assert_eq!(compute_transparency(3_500_000_000), 0.35);
    assert_eq!(compute_gradient_color(&probe, false).argb(), 0x59F5_F5F5);
    assert_eq!(compute_performance_score(&probe), 60);
}

#[test]
fn settings_json_drives_forced_mode() {
    let probe = machine(22631, 16_000_000_000, 12);
    let compositor = CountingCompositor::default();
    let settings = EffectSettings::from_json(r#"{"forcedMode":"ultimateEffect","theme":"light"}"#)
        .unwrap();

    let applied = try_apply_effect(&WindowHandle(42), &settings, &probe, &compositor).unwrap();
    assert_eq!(applied.mode, EffectMode::UltimateEffect);
    assert!(!applied.dark_theme);
    assert_eq!(applied.gradient.argb(), 0x26F5_F5F5);
}

#[test]
fn null_handle_error_is_reported() {
    let err = try_apply_effect(
        &HostWindow { hwnd: None },
        &EffectSettings::default(),
        &machine(19045, 0, 2),
        &CountingCompositor::default(),
    )
    .unwrap_err();
    assert!(matches!(err, EffectError::NullWindowHandle));
    assert_eq!(err.code(), "E_NULL_HWND");
}

#[test]
fn profile_matches_individual_queries() {
    let probe = machine(19045, 8_000_000_001, 8);
    let profile = SystemProfile::capture(&probe);

    assert_eq!(profile.mode, select_mode(&probe));
    assert_eq!(profile.performance_score, compute_performance_score(&probe));
    assert_eq!(profile.dark_gradient, compute_gradient_color(&probe, true));
    assert_eq!(profile.performance_score, 90);
}
