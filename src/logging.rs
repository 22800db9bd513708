//! Diagnostic logging for the drivers.
//!
//! Records go to stderr through `flexi_logger`, so they never interleave with
//! the demo lines printed through a [`Console`](crate::console::Console).
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Repeating the call with the same level is a no-op.
//! - Switching to a different level after start is rejected.

use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

use crate::error::{Result, SolidError};

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

pub fn init_logging(level: &str) -> Result<()> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState> {
        let logger = Logger::try_with_str(level)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;
        debug!("logging started at level {level}");
        Ok(LoggingState {
            level,
            _logger: logger,
        })
    })?;

    if state.level != level {
        return Err(SolidError::Logging(format!(
            "logging already initialized with level `{}`; refusing to switch to `{}`",
            state.level, level
        )));
    }

    Ok(())
}

fn normalize_level(level: &str) -> Result<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(SolidError::Logging(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error|off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level(" WARNING ").unwrap(), "warn");
        assert_eq!(normalize_level("debug").unwrap(), "debug");
        assert!(matches!(
            normalize_level("loud"),
            Err(SolidError::Logging(_))
        ));
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_level_switch() {
        init_logging("error").unwrap();
        init_logging("ERROR").unwrap();
        assert!(init_logging("trace").is_err());
    }

    #[test]
    fn test_invalid_level_rejected_before_start() {
        assert!(init_logging("verbose").is_err());
    }
}
