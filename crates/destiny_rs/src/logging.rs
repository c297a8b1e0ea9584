//! Process-wide logging bootstrap.
//!
//! Libraries in this workspace only emit through the `log` facade; the
//! front end calls [`init_logging`] once to attach a `flexi_logger` backend.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Repeating the same call is a no-op; a conflicting call is rejected.
//! - Initialization never panics.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::DestinyError;

const LOG_FILE_BASENAME: &str = "destiny";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    spec: String,
    directory: Option<PathBuf>,
    _logger: LoggerHandle,
}

/// Start logging with a flexi_logger spec string such as `"info"` or
/// `"warn,destiny_transit=trace"`.
///
/// With `directory` set, records go to size-rotated files there; otherwise
/// to stderr.
///
/// # Errors
/// - `spec` does not parse.
/// - `directory` cannot be created.
/// - Logging is already active with a different spec or directory.
pub fn init_logging(spec: &str, directory: Option<&Path>) -> Result<(), DestinyError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(DestinyError::Logging("log level cannot be empty".to_string()));
    }

    let state = LOGGING_STATE.get_or_try_init(|| start_logger(spec, directory))?;

    if state.spec != spec {
        return Err(DestinyError::Logging(format!(
            "logging already initialized with `{}`; refusing to switch to `{spec}`",
            state.spec
        )));
    }
    if state.directory.as_deref() != directory {
        return Err(DestinyError::Logging(format!(
            "logging already initialized at `{}`; refusing to switch",
            describe_target(state.directory.as_deref())
        )));
    }
    Ok(())
}

/// Active spec and directory, or `None` before [`init_logging`].
pub fn logging_status() -> Option<(String, Option<PathBuf>)> {
    LOGGING_STATE
        .get()
        .map(|s| (s.spec.clone(), s.directory.clone()))
}

fn start_logger(spec: &str, directory: Option<&Path>) -> Result<LoggingState, DestinyError> {
    let logger = Logger::try_with_str(spec)
        .map_err(|e| DestinyError::Logging(format!("invalid log level `{spec}`: {e}")))?;

    let logger = match directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(|e| {
                DestinyError::Logging(format!(
                    "failed to create log directory `{}`: {e}",
                    dir.display()
                ))
            })?;
            logger
                .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
        }
        None => logger.log_to_stderr().format_for_stderr(flexi_logger::default_format),
    };

    let handle = logger
        .start()
        .map_err(|e| DestinyError::Logging(format!("failed to start logger: {e}")))?;

    info!(
        "logging started level={spec} target={} version={}",
        describe_target(directory),
        env!("CARGO_PKG_VERSION")
    );

    Ok(LoggingState {
        spec: spec.to_string(),
        directory: directory.map(Path::to_path_buf),
        _logger: handle,
    })
}

fn describe_target(directory: Option<&Path>) -> String {
    directory.map_or_else(|| "stderr".to_string(), |d| d.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_rejected_without_initializing() {
        assert!(matches!(init_logging("  ", None), Err(DestinyError::Logging(_))));
    }

    // Only test in this binary that installs a global logger.
    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");

        init_logging("info", Some(logs.as_path())).unwrap();
        init_logging("info", Some(logs.as_path())).unwrap();
        assert!(logs.is_dir());

        let err = init_logging("debug", Some(logs.as_path())).unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
        let err = init_logging("info", None).unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));

        let (spec, active) = logging_status().unwrap();
        assert_eq!(spec, "info");
        assert_eq!(active.as_deref(), Some(logs.as_path()));
    }
}
