//! Backdrop effect data model

use serde::{Deserialize, Serialize};

/// Backdrop effect family chosen for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectMode {
    /// Custom blur + gradient effect available from Windows 10 1903
    UltimateEffect,
    /// Acrylic-style blur available from Windows 10 1607
    LegacyAcrylic,
    /// Plain blur behind, works everywhere DWM composition is on
    BasicBlur,
    /// System Mica material (Windows 11)
    NativeMica,
}

impl EffectMode {
    pub const ALL: [EffectMode; 4] = [
        EffectMode::UltimateEffect,
        EffectMode::LegacyAcrylic,
        EffectMode::BasicBlur,
        EffectMode::NativeMica,
    ];

    /// Stable integer code used across the C ABI.
    pub fn code(self) -> i32 {
        match self {
            EffectMode::UltimateEffect => 0,
            EffectMode::LegacyAcrylic => 1,
            EffectMode::BasicBlur => 2,
            EffectMode::NativeMica => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.code() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectMode::UltimateEffect => "ultimateEffect",
            EffectMode::LegacyAcrylic => "legacyAcrylic",
            EffectMode::BasicBlur => "basicBlur",
            EffectMode::NativeMica => "nativeMica",
        }
    }
}

impl std::fmt::Display for EffectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Packed `0xAARRGGBB` tint used behind the blurred backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradientColor(pub u32);

impl GradientColor {
    pub fn from_parts(alpha: u8, rgb: u32) -> Self {
        Self(((alpha as u32) << 24) | (rgb & 0x00FF_FFFF))
    }

    pub fn argb(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn rgb(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl std::fmt::Display for GradientColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Raw platform window handle (`HWND` on Windows).
///
/// Zero means the window has not been realized yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub isize);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<isize> for WindowHandle {
    fn from(raw: isize) -> Self {
        Self(raw)
    }
}

/// Frame margins passed to the compositor, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    /// `-1` on every side: extend the frame over the whole client area.
    pub const FULL: Margins = Margins {
        left: -1,
        right: -1,
        top: -1,
        bottom: -1,
    };

    pub fn is_full(&self) -> bool {
        self.left == -1
    }
}
