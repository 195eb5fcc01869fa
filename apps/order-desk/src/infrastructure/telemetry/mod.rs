//! Tracing Setup
//!
//! Console logging goes to stderr so command output on stdout stays clean.
//! When a log file is configured, a second non-blocking layer mirrors every
//! event into it without ANSI colours.
//!
//! # Usage
//!
//! ```ignore
//! use order_desk::infrastructure::telemetry::{self, TelemetryConfig};
//!
//! // Keep the guard alive for the whole program so the file writer flushes.
//! let _guard = telemetry::init_with_config(&TelemetryConfig::default())?;
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directives applied on top of `RUST_LOG`.
const DEFAULT_DIRECTIVES: [&str; 3] = ["order_desk=info", "hyper=warn", "reqwest=warn"];

/// Guard that flushes the file writer when dropped.
#[derive(Debug)]
pub struct TelemetryGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Mirror logs into this file.
    pub log_file: Option<PathBuf>,
    /// Colourise console output.
    pub ansi: bool,
}

impl TelemetryConfig {
    /// Log to stderr and, if given, to `log_file`.
    #[must_use]
    pub fn new(log_file: Option<PathBuf>) -> Self {
        Self {
            log_file,
            ansi: false,
        }
    }
}

/// Telemetry initialization error.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// A filter directive did not parse.
    #[error("invalid log directive '{directive}': {reason}")]
    Directive {
        /// The offending directive.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// The log file path has no file name.
    #[error("log file path '{0}' has no file name")]
    LogFilePath(PathBuf),

    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter from `RUST_LOG` plus the default directives.
pub fn env_filter() -> Result<EnvFilter, TelemetryError> {
    DEFAULT_DIRECTIVES
        .iter()
        .try_fold(EnvFilter::from_default_env(), |filter, directive| {
            let parsed = directive
                .parse::<Directive>()
                .map_err(|e| TelemetryError::Directive {
                    directive: (*directive).to_string(),
                    reason: e.to_string(),
                })?;
            Ok(filter.add_directive(parsed))
        })
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), TelemetryError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| TelemetryError::LogFilePath(path.to_path_buf()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((directory, PathBuf::from(file_name)))
}

/// Install the global subscriber.
///
/// Returns a guard that must be kept alive for the duration of the program.
pub fn init_with_config(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(config.ansi)
        .with_file(false)
        .with_line_number(false);

    let (file_layer, file_guard) = match config.log_file.as_deref() {
        Some(path) => {
            let (directory, file_name) = split_log_path(path)?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter()?)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    if let Some(path) = config.log_file.as_deref() {
        tracing::debug!(log_file = %path.display(), "File logging enabled");
    }

    Ok(TelemetryGuard {
        _file_guard: file_guard,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        assert!(env_filter().is_ok());
    }

    #[test]
    fn default_config_logs_to_console_only() {
        let config = TelemetryConfig::default();
        assert!(config.log_file.is_none());
        assert!(!config.ansi);
    }

    #[test]
    fn log_path_is_split_into_directory_and_file() {
        let (dir, file) = split_log_path(Path::new("/var/log/order-desk.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/var/log"));
        assert_eq!(file, PathBuf::from("order-desk.log"));

        let (dir, file) = split_log_path(Path::new("desk.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("desk.log"));
    }

    #[test]
    fn log_path_without_file_name_is_refused() {
        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(TelemetryError::LogFilePath(_))
        ));
    }
}
