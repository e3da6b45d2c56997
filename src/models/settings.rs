//! Host-supplied effect settings

use serde::{Deserialize, Serialize};

use super::effect::EffectMode;
use crate::utils::error::{EffectError, EffectResult};

/// Theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Derive from the running OS
    #[default]
    System,
}

impl ThemeMode {
    /// Explicit choice, or `None` when the OS should decide.
    pub fn explicit_dark(self) -> Option<bool> {
        match self {
            ThemeMode::Light => Some(false),
            ThemeMode::Dark => Some(true),
            ThemeMode::System => None,
        }
    }
}

/// Effect settings passed in by the window host.
///
/// Never persisted; the host owns the storage and hands us JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EffectSettings {
    /// Skip selection and use this mode
    pub forced_mode: Option<EffectMode>,
    pub theme: ThemeMode,
}

impl EffectSettings {
    pub fn from_json(json: &str) -> EffectResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| EffectError::InvalidSettings(e.to_string()))
    }

    pub fn to_json(&self) -> EffectResult<String> {
        serde_json::to_string(self).map_err(|e| EffectError::InvalidSettings(e.to_string()))
    }
}
