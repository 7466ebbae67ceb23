//! Error types for a scan submission.
//!
//! Every variant's `Display` is the exact text shown in the error block,
//! so the controller can render any failure the same way.

use std::path::PathBuf;

/// Shown when a failure carries no message of its own.
pub const NETWORK_ERROR_FALLBACK: &str = "Unexpected network error";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The selected file could not be read.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exceeds the upload limit; no request was sent.
    #[error("File larger than {limit_mb}MB")]
    TooLarge { size: u64, limit_mb: u64 },

    /// The request could not be sent or the response could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// The backend answered but reported a failure.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// Startup configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid endpoint '{value}': {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Upload field name must not be empty")]
    EmptyFieldName,
}

impl ScanError {
    /// Message for the error block, never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            NETWORK_ERROR_FALLBACK.to_string()
        } else {
            message
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ScanError::Rejected { status, .. } => Some(*status),
            ScanError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_backend_message() {
        let err = ScanError::Rejected { status: 500, message: "scan timeout".into() };
        assert_eq!(err.user_message(), "scan timeout");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn empty_message_falls_back() {
        let err = ScanError::Rejected { status: 502, message: "  ".into() };
        assert_eq!(err.user_message(), NETWORK_ERROR_FALLBACK);
    }

    #[test]
    fn too_large_mentions_limit() {
        let err = ScanError::TooLarge { size: 700 << 20, limit_mb: 650 };
        assert_eq!(err.user_message(), "File larger than 650MB");
    }
}
