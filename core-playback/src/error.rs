//! # Playback Error Types
//!
//! The controller's command API never fails; these errors come from the
//! opt-in option checks and from backend calls the controller reports in its
//! logs.

use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors produced by the playback core.
#[derive(Error, Debug)]
pub enum PlaybackError {
    /// One or more player options are missing or out of range.
    #[error("Invalid player options: {0}")]
    InvalidOption(String),

    /// Player options could not be parsed from JSON.
    #[error("Failed to parse player options: {0}")]
    Parse(#[from] serde_json::Error),

    /// The media backend refused an operation.
    #[error("Media backend error: {0}")]
    Backend(#[from] BridgeError),
}

impl PlaybackError {
    /// Returns `true` if this error originated in the media backend.
    pub fn is_backend_error(&self) -> bool {
        matches!(self, PlaybackError::Backend(_))
    }
}

/// Result type for playback operations.
pub type Result<T> = std::result::Result<T, PlaybackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_convert() {
        let err: PlaybackError = BridgeError::OperationFailed("decode".to_string()).into();
        assert!(err.is_backend_error());
        assert_eq!(
            err.to_string(),
            "Media backend error: Bridge operation failed: decode"
        );
    }

    #[test]
    fn parse_errors_convert() {
        let err: PlaybackError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_backend_error());
        assert!(err.to_string().starts_with("Failed to parse player options"));
    }
}
