//! Client Errors
//!
//! `Display` is what the user sees in the error dialog. Transport and decode
//! failures carry their details for logging but show a generic message.

/// Failure of a request against the todo backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The envelope came back with `status.error == true`.
    #[error("{message}")]
    Backend { code: i32, message: String },

    /// The request never completed.
    #[error("Could not reach the server. Please try again.")]
    Transport(String),

    /// The response was not the expected JSON envelope.
    #[error("The server sent an unexpected response.")]
    Decode(String),
}

impl ApiError {
    /// Diagnostic detail for logs
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Backend { message, .. } => message,
            ApiError::Transport(detail) | ApiError::Decode(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_hides_details() {
        let err = ApiError::Transport(
            "error sending request for url (http://localhost:8000/todos)".into(),
        );
        assert_eq!(err.to_string(), "Could not reach the server. Please try again.");
        assert!(err.detail().contains("localhost:8000"));
    }

    #[test]
    fn test_backend_error_shows_message() {
        let err = ApiError::Backend {
            code: 404,
            message: "TODOが見つかりません。".into(),
        };
        assert_eq!(err.to_string(), "TODOが見つかりません。");
    }
}
