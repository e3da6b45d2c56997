//! Glasspane error types

use serde::Serialize;
use thiserror::Error;

/// Why an effect could not be applied.
#[derive(Debug, Error)]
pub enum EffectError {
    /// The host window has no native handle yet
    #[error("window handle is null")]
    NullWindowHandle,

    /// The compositor returned a failure status
    #[error("compositor call failed: HRESULT=0x{0:08X}")]
    Compositor(i32),

    /// The compositor call panicked
    #[error("compositor call panicked: {0}")]
    CompositorPanic(String),

    /// Host-supplied settings did not parse
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Logging bootstrap failed
    #[error("logging error: {0}")]
    Logging(String),
}

/// Error wrapper handed to hosts as JSON
#[derive(Debug, Serialize)]
pub struct CommandError {
    pub code: String,
    pub message: String,
}

impl EffectError {
    /// Stable code for hosts that branch on the failure kind.
    pub fn code(&self) -> &'static str {
        match self {
            EffectError::NullWindowHandle => "E_NULL_HWND",
            EffectError::Compositor(_) => "E_COMPOSITOR",
            EffectError::CompositorPanic(_) => "E_COMPOSITOR_PANIC",
            EffectError::InvalidSettings(_) => "E_SETTINGS",
            EffectError::Logging(_) => "E_LOGGING",
        }
    }
}

impl From<&EffectError> for CommandError {
    fn from(err: &EffectError) -> Self {
        CommandError {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<EffectError> for CommandError {
    fn from(err: EffectError) -> Self {
        CommandError::from(&err)
    }
}

// Serialize through CommandError so hosts always see `{code, message}`
impl Serialize for EffectError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        CommandError::from(self).serialize(serializer)
    }
}

/// Result alias for effect operations
pub type EffectResult<T> = Result<T, EffectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EffectError::Compositor(0x8000_4001u32 as i32);
        assert_eq!(err.to_string(), "compositor call failed: HRESULT=0x80004001");
        assert_eq!(EffectError::NullWindowHandle.to_string(), "window handle is null");
    }

    #[test]
    fn test_command_error_conversion() {
        let cmd_err: CommandError = EffectError::NullWindowHandle.into();
        assert_eq!(cmd_err.code, "E_NULL_HWND");

        let cmd_err: CommandError = EffectError::InvalidSettings("eof".into()).into();
        assert_eq!(cmd_err.code, "E_SETTINGS");
        assert_eq!(cmd_err.message, "invalid settings: eof");
    }

    #[test]
    fn test_error_serializes_as_command_error() {
        let json = serde_json::to_string(&EffectError::CompositorPanic("boom".into())).unwrap();
        assert_eq!(
            json,
            r#"{"code":"E_COMPOSITOR_PANIC","message":"compositor call panicked: boom"}"#
        );
    }
}
