//! Logging bootstrap for hosts that do not install their own subscriber

use std::path::{Path, PathBuf};

pub use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::error::{EffectError, EffectResult};

const LOG_FILE_PREFIX: &str = "glasspane.log";

/// `%APPDATA%/Glasspane/Logs` on Windows.
pub fn default_log_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Glasspane")
        .join("Logs")
}

/// Install the global subscriber.
///
/// Filter comes from `RUST_LOG`, falling back to `info`. With a directory, logs
/// also go to a daily rolling file; keep the returned guard alive for as long
/// as file output is wanted. Fails if a global subscriber is already set.
pub fn init_logging(log_dir: Option<&Path>) -> EffectResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer().with_target(false);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .try_init()
            .map_err(|e| EffectError::Logging(e.to_string()))?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .map_err(|e| EffectError::Logging(format!("cannot create {}: {}", dir.display(), e)))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file = fmt::layer().with_ansi(false).with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| EffectError::Logging(e.to_string()))?;

    tracing::info!("logging to {:?}", dir);
    Ok(Some(guard))
}
