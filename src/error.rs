use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("payment of {amount:.2} rejected by {method}: {reason}")]
    PaymentRejected {
        method: String,
        amount: f64,
        reason: String,
    },

    #[error("{channel} notification failed: {reason}")]
    NotificationFailed { channel: String, reason: String },

    #[error("invalid demo configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl SolidError {
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn notification_failed(channel: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotificationFailed {
            channel: channel.into(),
            reason: reason.into(),
        }
    }

    pub fn payment_rejected(method: impl Into<String>, amount: f64, reason: impl Into<String>) -> Self {
        Self::PaymentRejected {
            method: method.into(),
            amount,
            reason: reason.into(),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for SolidError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        SolidError::Logging(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_message() {
        let err = SolidError::EmptyField { field: "email" };
        assert_eq!(err.to_string(), "email must not be empty");
    }

    #[test]
    fn test_read_error_keeps_path_and_source() {
        let err = SolidError::read(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let message = err.to_string();
        assert!(message.contains("missing.txt"));
        assert!(message.contains("no such file"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_payment_rejected_formats_amount() {
        let err = SolidError::payment_rejected("PayPal", 12.5, "card expired");
        assert_eq!(
            err.to_string(),
            "payment of 12.50 rejected by PayPal: card expired"
        );
    }
}
