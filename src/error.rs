use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Uploaded filename absent or not a .csv file
    #[error("Unsupported file: {0}. Only CSV files are accepted")]
    BadExtension(String),

    /// Uploaded bytes are not valid UTF-8 text
    #[error("Failed to decode file: {0}")]
    Decode(String),

    /// CSV parsed as text but produced zero valid records
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Classifier artifact failed to load at startup
    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// Malformed multipart request body
    #[error("Invalid upload: {0}")]
    Upload(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadExtension(_) => StatusCode::BAD_REQUEST,
            AppError::Decode(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Upload(_) => StatusCode::BAD_REQUEST,
            AppError::ClassifierUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &str {
        match self {
            AppError::BadExtension(_) => "BAD_EXTENSION",
            AppError::Decode(_) => "DECODE_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Upload(_) => "UPLOAD_ERROR",
            AppError::ClassifierUnavailable(_) => "CLASSIFIER_UNAVAILABLE",
            AppError::Io(_) => "IO_ERROR",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Convert AppError to HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        tracing::error!(
            error_code = error_code,
            status_code = status.as_u16(),
            message = %message,
            "Request error"
        );

        // The dashboard contract is a flat {"error": message} body.
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Conversion from serde_json::Error
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Conversion from config::ConfigError
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// Conversion from axum multipart extraction errors
impl From<axum::extract::multipart::MultipartError> for AppError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        AppError::Upload(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::BadExtension("data.txt".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Decode("bad bytes".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidInput("no valid rows".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ClassifierUnavailable("missing artifact".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::BadExtension("data.txt".to_string()).error_code(),
            "BAD_EXTENSION"
        );
        assert_eq!(
            AppError::InvalidInput("no valid rows".to_string()).error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            AppError::ClassifierUnavailable("missing".to_string()).error_code(),
            "CLASSIFIER_UNAVAILABLE"
        );
    }

    #[test]
    fn test_bad_extension_message_mentions_csv() {
        let msg = AppError::BadExtension("report.pdf".to_string()).to_string();
        assert!(msg.contains("CSV"));
    }
}
