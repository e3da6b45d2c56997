//! Glasspane data model

pub mod effect;
pub mod settings;

pub use effect::{EffectMode, GradientColor, Margins, WindowHandle};
pub use settings::{EffectSettings, ThemeMode};
