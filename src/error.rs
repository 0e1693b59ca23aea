//! Unified SDK error types.

use thiserror::Error;

/// Fallback message used when a caught failure renders an empty message.
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// The message a chart state should display for this error.
    ///
    /// Falls back to [`UNKNOWN_ERROR`] if the rendered message is empty.
    pub fn display_message(&self) -> String {
        let msg = self.to_string();
        if msg.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            msg
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The query endpoint answered with a non-2xx status.
    #[error("QuestDB query failed: {reason}")]
    QueryFailed { status: u16, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_message_matches_status_text() {
        let err = HttpError::QueryFailed {
            status: 500,
            reason: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "QuestDB query failed: Internal Server Error");
    }

    #[test]
    fn test_display_message_passes_through_http_error() {
        let err = SdkError::from(HttpError::QueryFailed {
            status: 500,
            reason: "Internal Server Error".to_string(),
        });
        assert_eq!(
            err.display_message(),
            "QuestDB query failed: Internal Server Error"
        );
    }

    #[test]
    fn test_display_message_falls_back_when_empty() {
        let err = SdkError::Other(String::new());
        assert_eq!(err.display_message(), UNKNOWN_ERROR);
    }
}
