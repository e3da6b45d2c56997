//! Glasspane services
//!
//! Selection heuristics, effect application and diagnostics

pub mod applier;
pub mod profile;
pub mod selector;

pub use applier::{apply_effect, try_apply_effect, AppliedEffect};
pub use profile::SystemProfile;
pub use selector::{
    compute_gradient_color, compute_performance_score, compute_transparency, gradient_color_for,
    resolve_dark_theme, select_mode,
};
