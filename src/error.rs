//! Error types and handling for `SkyGlance`

use thiserror::Error;

/// Stable error codes, useful for logs and scripted callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Connection could not be established
    ApiNetworkError,
    /// Server answered with a non-200 status
    ApiHttpStatus,
    /// Body was not the JSON we expected
    ApiInvalidResponse,
    /// Geocoding returned no candidates
    ApiLocationNotFound,
    InvalidInput,
    InvalidConfig,
    Io,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ApiNetworkError => "API_NETWORK_ERROR",
            ErrorCode::ApiHttpStatus => "API_HTTP_STATUS",
            ErrorCode::ApiInvalidResponse => "API_INVALID_RESPONSE",
            ErrorCode::ApiLocationNotFound => "API_LOCATION_NOT_FOUND",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::Io => "IO",
        }
    }
}

/// Main error type for `SkyGlance`
#[derive(Error, Debug)]
pub enum SkyglanceError {
    /// The request never reached the server
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with something other than 200
    #[error("HTTP request failed with status {status}")]
    HttpStatus { status: u16 },

    /// The response body was not valid JSON or lacked expected fields
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Geocoding found nothing for the given name
    #[error("No results found for '{query}'")]
    NoResults { query: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl SkyglanceError {
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn http_status(status: u16) -> Self {
        Self::HttpStatus { status }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn no_results<S: Into<String>>(query: S) -> Self {
        Self::NoResults {
            query: query.into(),
        }
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable code for this error
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            SkyglanceError::Network { .. } => ErrorCode::ApiNetworkError,
            SkyglanceError::HttpStatus { .. } => ErrorCode::ApiHttpStatus,
            SkyglanceError::Parse { .. } => ErrorCode::ApiInvalidResponse,
            SkyglanceError::NoResults { .. } => ErrorCode::ApiLocationNotFound,
            SkyglanceError::Validation { .. } => ErrorCode::InvalidInput,
            SkyglanceError::Config { .. } => ErrorCode::InvalidConfig,
            SkyglanceError::Io { .. } => ErrorCode::Io,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkyglanceError::Network { .. } => {
                "Unable to connect to the weather service. Please check your internet connection."
                    .to_string()
            }
            SkyglanceError::HttpStatus { status } => {
                format!("The weather service returned an error (HTTP {status}). Please try again.")
            }
            SkyglanceError::Parse { .. } => {
                "The weather service sent data we could not understand.".to_string()
            }
            SkyglanceError::NoResults { query } => format!("Location not found: {query}"),
            SkyglanceError::Validation { message } => format!("Invalid input: {message}"),
            SkyglanceError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SkyglanceError::Io { .. } => "Terminal I/O failed.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SkyglanceError::http_status(503);
        assert!(matches!(err, SkyglanceError::HttpStatus { status: 503 }));
        assert_eq!(err.code(), ErrorCode::ApiHttpStatus);

        let err = SkyglanceError::no_results("Atlantis");
        assert!(matches!(err, SkyglanceError::NoResults { .. }));
        assert_eq!(err.code().as_str(), "API_LOCATION_NOT_FOUND");

        let err = SkyglanceError::validation("blank");
        assert_eq!(err.code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn test_user_messages() {
        let err = SkyglanceError::network("connection refused");
        assert!(err.user_message().contains("Unable to connect"));

        let err = SkyglanceError::http_status(404);
        assert!(err.user_message().contains("HTTP 404"));

        let err = SkyglanceError::no_results("Atlantis");
        assert_eq!(err.user_message(), "Location not found: Atlantis");

        let err = SkyglanceError::validation("Location cannot be empty");
        assert!(err.user_message().contains("Location cannot be empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: SkyglanceError = io_err.into();
        assert!(matches!(err, SkyglanceError::Io { .. }));
    }
}
