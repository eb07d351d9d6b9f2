use thiserror::Error;

/// Everything that can go wrong talking to the REST API.
///
/// Callers catch these at the call site and turn them into a notification
/// with [`ApiError::user_message`]. Nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status. `message` is the body's `message` or `error` field,
    /// falling back to the status reason phrase.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Checked locally before any request was made.
    #[error("{0}")]
    Precondition(String),
}

impl ApiError {
    pub fn precondition(message: impl Into<String>) -> Self {
        ApiError::Precondition(message.into())
    }

    /// Text suitable for a toast. Server-provided messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Unable to reach the server. Please try again.".to_string(),
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Decode(_) => "Unexpected response from the server.".to_string(),
            ApiError::Precondition(message) => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_is_verbatim() {
        let err = ApiError::Status {
            status: 409,
            message: "Dealership has vehicles assigned".to_string(),
        };
        assert_eq!(err.user_message(), "Dealership has vehicles assigned");
        assert_eq!(err.status(), Some(409));
        assert_eq!(
            err.to_string(),
            "Dealership has vehicles assigned (HTTP 409)"
        );
    }

    #[test]
    fn test_precondition() {
        let err = ApiError::precondition("Please select a dealership");
        assert_eq!(err.user_message(), "Please select a dealership");
        assert_eq!(err.status(), None);
    }
}
