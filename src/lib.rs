//! Glasspane - window backdrop effect selection for Windows
//!
//! Picks a backdrop family (Mica, acrylic, blur) for a desktop window from
//! coarse machine facts and applies it with one DWM call.
//!
//! # Architecture
//!
//! - `models`: effect modes, tint colors, window handles, host settings
//! - `platform`: capability traits plus the live Windows probe and compositor
//! - `services`: selection heuristics, effect application, diagnostics
//! - `logging`: tracing subscriber bootstrap
//! - `utils`: error types
//!
//! # Example
//!
//! ```no_run
//! use glasspane::{apply_effect, NativeCompositor, NativeProbe, WindowHandle};
//!
//! # let raw_hwnd: isize = 0;
//! let applied = apply_effect(&WindowHandle(raw_hwnd), None, &NativeProbe, &NativeCompositor);
//! if !applied {
//!     // fall back to an opaque background
//! }
//! ```

pub mod logging;
pub mod models;
pub mod platform;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::{EffectMode, EffectSettings, GradientColor, Margins, ThemeMode, WindowHandle};
pub use platform::{
    Compositor, FixedProbe, HardwareProbe, NativeCompositor, NativeProbe, NativeWindow,
    OsCapabilities, OsVersion, SystemProbe, S_OK,
};
pub use services::{
    apply_effect, compute_gradient_color, compute_performance_score, compute_transparency,
    select_mode, try_apply_effect, AppliedEffect, SystemProfile,
};
pub use utils::{CommandError, EffectError, EffectResult};
