//! Diagnostic snapshot of everything the selector looks at

use serde::Serialize;

use super::selector::{
    compute_performance_score, compute_transparency, gradient_color_for, select_mode,
};
use crate::models::{EffectMode, GradientColor};
use crate::platform::SystemProbe;

/// One sample of the machine and the choices derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemProfile {
    pub os: String,
    pub total_memory_bytes: u64,
    pub logical_processors: usize,
    pub mode: EffectMode,
    pub transparency: f64,
    pub dark_gradient: GradientColor,
    pub light_gradient: GradientColor,
    pub performance_score: u8,
}

impl SystemProfile {
    pub fn capture<P: SystemProbe + ?Sized>(probe: &P) -> Self {
        // Sample memory once so both gradients agree with `transparency`
        let total_memory_bytes = probe.total_memory_bytes();
        let transparency = compute_transparency(total_memory_bytes);

        Self {
            os: probe.os_description(),
            total_memory_bytes,
            logical_processors: probe.logical_processor_count(),
            mode: select_mode(probe),
            transparency,
            dark_gradient: gradient_color_for(transparency, true),
            light_gradient: gradient_color_for(transparency, false),
            performance_score: compute_performance_score(probe),
        }
    }
}
