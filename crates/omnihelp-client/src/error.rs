//! Error types for backend operations.

/// Result type for all backend operations in this crate.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
/// Most functions in this crate return this type for consistent error handling.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error types for Omni-Help backend operations.
///
/// The taxonomy is deliberately flat: every failure is a transport or backend
/// failure, distinguished only by the optional human-readable detail the
/// backend attached to the response body. Callers format failures for display
/// via [`Error::detail`] and [`Error::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client errors (connection, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("API error (status {status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable detail extracted from the response body
        detail: Option<String>,
    },

    /// Invalid or malformed API response
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of what's invalid
        message: String,
        /// Optional raw response body for debugging
        body: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid input data
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what's invalid
        message: String,
    },

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an API error
    pub fn api(status: u16, detail: Option<String>) -> Self {
        Self::Api { status, detail }
    }

    /// Create an invalid response error
    pub fn invalid_response(message: impl Into<String>, body: Option<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
            body,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Get the detail message the backend attached to the failure, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Get the HTTP status code if this is an HTTP/API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the error category for metrics/logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(_) => "http",
            Error::Api { .. } => "api",
            Error::InvalidResponse { .. } => "invalid_response",
            Error::Serialization(_) => "serialization",
            Error::Config { .. } => "config",
            Error::InvalidInput { .. } => "invalid_input",
            Error::Io(_) => "io",
        }
    }

    /// Check if this is a client-side error (programming/configuration issue)
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Config { .. }
            | Error::InvalidInput { .. }
            | Error::Serialization(_)
            | Error::Io(_) => true,
            Error::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }

    /// Check if this is a server-side error
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }

    /// Get a user-friendly error message suitable for display
    ///
    /// Prefers the backend-provided detail; falls back to a short generic
    /// description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            Error::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Error::Api {
                status,
                detail: None,
            } => format!("Request failed with status code {status}"),
            Error::Http(err) if err.is_timeout() => "The request timed out".to_string(),
            Error::Http(_) => "A network error occurred".to_string(),
            Error::InvalidResponse { .. } | Error::Serialization(_) => {
                "The server returned an unexpected response".to_string()
            }
            Error::Config { message } => format!("Configuration error: {message}"),
            Error::InvalidInput { message } => message.clone(),
            Error::Io(_) => "A file error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let api_err = Error::api(500, Some("Internal server error".to_string()));
        assert_eq!(api_err.category(), "api");
        assert!(api_err.is_server_error());
        assert!(!api_err.is_client_error());

        let config_err = Error::config("Missing base URL");
        assert_eq!(config_err.category(), "config");
        assert!(config_err.is_client_error());

        let input_err = Error::invalid_input("File has no extension");
        assert_eq!(input_err.category(), "invalid_input");
        assert!(input_err.is_client_error());
    }

    #[test]
    fn test_status_code() {
        let api_err = Error::api(404, Some("Order not found".to_string()));
        assert_eq!(api_err.status_code(), Some(404));
        assert!(api_err.is_client_error());

        let config_err = Error::config("Bad config");
        assert_eq!(config_err.status_code(), None);
    }

    #[test]
    fn test_detail_extraction() {
        let with_detail = Error::api(400, Some("Query cannot be empty".to_string()));
        assert_eq!(with_detail.detail(), Some("Query cannot be empty"));
        assert_eq!(with_detail.user_message(), "Query cannot be empty");

        let without_detail = Error::api(502, None);
        assert_eq!(without_detail.detail(), None);
        assert_eq!(
            without_detail.user_message(),
            "Request failed with status code 502"
        );
    }

    #[test]
    fn test_user_message_fallbacks() {
        let config_err = Error::config("invalid base URL");
        assert_eq!(
            config_err.user_message(),
            "Configuration error: invalid base URL"
        );

        let response_err = Error::invalid_response("truncated body", None);
        assert_eq!(
            response_err.user_message(),
            "The server returned an unexpected response"
        );
    }
}
