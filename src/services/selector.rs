//! Effect mode selection heuristics
//!
//! Every function here is a pure query over an injected probe. Nothing is
//! cached between calls, so results follow the probe's latest sample.

use crate::models::{EffectMode, GradientColor, ThemeMode};
use crate::platform::{HardwareProbe, OsCapabilities, SystemProbe};

/// Memory above this is the high tier.
pub const HIGH_MEMORY_BYTES: u64 = 8_000_000_000;
/// Memory above this (and not high) is the mid tier.
pub const MID_MEMORY_BYTES: u64 = 4_000_000_000;

pub const TRANSPARENCY_HIGH_MEMORY: f64 = 0.15;
pub const TRANSPARENCY_MID_MEMORY: f64 = 0.25;
pub const TRANSPARENCY_LOW_MEMORY: f64 = 0.35;

pub const DARK_BASE_RGB: u32 = 0x30_1934;
pub const LIGHT_BASE_RGB: u32 = 0xF5_F5F5;

const BASE_SCORE: i32 = 50;

/// Pick the effect family for the running OS.
///
/// Order is fixed: native Mica wins over the custom 1903 effect even where the
/// custom effect could look richer.
pub fn select_mode<C: OsCapabilities + ?Sized>(os: &C) -> EffectMode {
    let mode = if os.is_windows11_or_greater() {
        EffectMode::NativeMica
    } else if os.is_windows10_1903_or_greater() {
        EffectMode::UltimateEffect
    } else if os.is_windows10_1607_or_greater() {
        EffectMode::LegacyAcrylic
    } else {
        EffectMode::BasicBlur
    };

    tracing::debug!(%mode, "effect mode selected");
    mode
}

/// Map a memory sample to a tint transparency. Boundaries fall to the lower tier.
pub fn compute_transparency(total_memory_bytes: u64) -> f64 {
    if total_memory_bytes > HIGH_MEMORY_BYTES {
        TRANSPARENCY_HIGH_MEMORY
    } else if total_memory_bytes > MID_MEMORY_BYTES {
        TRANSPARENCY_MID_MEMORY
    } else {
        TRANSPARENCY_LOW_MEMORY
    }
}

/// Tint for a known transparency.
pub fn gradient_color_for(transparency: f64, is_dark_theme: bool) -> GradientColor {
    let alpha = (transparency * 255.0).round().clamp(0.0, 255.0) as u8;
    let rgb = if is_dark_theme {
        DARK_BASE_RGB
    } else {
        LIGHT_BASE_RGB
    };
    GradientColor::from_parts(alpha, rgb)
}

/// Tint for the probe's current memory sample.
pub fn compute_gradient_color<H: HardwareProbe + ?Sized>(
    probe: &H,
    is_dark_theme: bool,
) -> GradientColor {
    let transparency = compute_transparency(probe.total_memory_bytes());
    gradient_color_for(transparency, is_dark_theme)
}

fn memory_points(total_memory_bytes: u64) -> i32 {
    if total_memory_bytes > HIGH_MEMORY_BYTES {
        20
    } else if total_memory_bytes > MID_MEMORY_BYTES {
        10
    } else {
        0
    }
}

fn processor_points(logical_processors: usize) -> i32 {
    match logical_processors {
        n if n >= 8 => 15,
        n if n >= 4 => 10,
        n if n >= 2 => 5,
        _ => 0,
    }
}

// Newest tier first; tiers do not stack
fn os_points<C: OsCapabilities + ?Sized>(os: &C) -> i32 {
    if os.is_windows11_22h2_or_greater() {
        15
    } else if os.is_windows11_or_greater() {
        10
    } else if os.is_windows10_2004_or_greater() {
        5
    } else {
        0
    }
}

/// Rough 0-100 rating of how much effect work the machine can take.
pub fn compute_performance_score<P: SystemProbe + ?Sized>(probe: &P) -> u8 {
    let memory = probe.total_memory_bytes();
    let processors = probe.logical_processor_count();

    let score = BASE_SCORE + memory_points(memory) + processor_points(processors) + os_points(probe);
    let score = score.clamp(0, 100) as u8;

    tracing::debug!(memory, processors, score, "performance score computed");
    score
}

/// Dark flag for the tint. The OS decides unless the theme is explicit.
pub fn resolve_dark_theme<C: OsCapabilities + ?Sized>(os: &C, theme: ThemeMode) -> bool {
    theme
        .explicit_dark()
        .unwrap_or_else(|| os.is_windows11_or_greater())
}
