//! Error taxonomy for the frontend. Validation errors never issue a request,
//! request errors carry the server-provided message, and protocol errors mark
//! 2xx responses that are missing required fields. `Display` output is the
//! user-facing banner text, so variants must not leak internals.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Protocol(String),
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message)
            | AppError::Validation(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Protocol(message) => write!(formatter, "{message}"),
            AppError::Http { message, .. } => write!(formatter, "{message}"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_errors_display_only_the_server_message() {
        let err = AppError::Http {
            status: 422,
            message: "Invalid code".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid code");
    }

    #[test]
    fn validation_errors_display_verbatim() {
        let err = AppError::Validation("Passwords do not match".to_string());
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[test]
    fn transport_errors_keep_their_user_phrasing() {
        let network = AppError::Network("Unable to reach the server: refused".to_string());
        assert_eq!(network.to_string(), "Unable to reach the server: refused");

        let timeout = AppError::Timeout("Request timed out. Please try again.".to_string());
        assert_eq!(timeout.to_string(), "Request timed out. Please try again.");

        let protocol = AppError::Protocol("Invalid response from server".to_string());
        assert_eq!(protocol.to_string(), "Invalid response from server");

        let config = AppError::Config("API base URL is not configured.".to_string());
        assert_eq!(config.to_string(), "API base URL is not configured.");

        let parse = AppError::Parse("bad json".to_string());
        assert_eq!(parse.to_string(), "Response error: bad json");

        let serialization = AppError::Serialization("bad body".to_string());
        assert_eq!(serialization.to_string(), "Request error: bad body");
    }
}
