use thiserror::Error;

pub const NETWORK_ERROR_CODE: &str = "NETWORK_ERROR";
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";
pub const INVALID_REQUEST_CODE: &str = "INVALID_REQUEST";

/// Failure of the single image fetch call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The endpoint could not be reached at all.
    #[error("Cannot connect to backend at {endpoint}. Is the server running?")]
    Connection { endpoint: String, detail: String },

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Http {
        status: u16,
        code: String,
        message: String,
    },

    /// A success response whose body was not a valid fetch response.
    #[error("failed to decode response body: {detail}")]
    Decode { status: u16, detail: String },
}

impl FetchError {
    /// HTTP status of the failure; `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::Connection { .. } => 0,
            FetchError::Http { status, .. } | FetchError::Decode { status, .. } => *status,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            FetchError::Connection { .. } => NETWORK_ERROR_CODE,
            FetchError::Http { code, .. } => code,
            FetchError::Decode { .. } => UNKNOWN_ERROR_CODE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

/// Visual weight of the global error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn alert_class(self) -> &'static str {
        match self {
            Severity::Warning => "alert-warning",
            Severity::Error => "alert-error",
        }
    }
}

/// User-facing text for a failed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub message: String,
    pub severity: Severity,
}

/// Map a failure's status and code to banner text and severity.
pub fn error_notice(status: u16, code: &str, message: &str) -> ErrorNotice {
    let (severity, message) = match status {
        0 => (
            Severity::Error,
            "Cannot connect to server. Please ensure the backend is running.".to_string(),
        ),
        400 if code == INVALID_REQUEST_CODE => {
            (Severity::Warning, format!("Invalid Request: {message}"))
        }
        400 => (Severity::Error, format!("Bad Request: {message}")),
        404 => (
            Severity::Error,
            "API endpoint not found. Please check the backend is running correctly.".to_string(),
        ),
        500 => (
            Severity::Error,
            "Server Error: Something went wrong on the server. Please try again.".to_string(),
        ),
        504 => (
            Severity::Warning,
            "Request Timeout: The request took too long. Please try with different parameters."
                .to_string(),
        ),
        _ if message.trim().is_empty() => (
            Severity::Error,
            "Error: An unexpected error occurred".to_string(),
        ),
        _ => (Severity::Error, format!("Error: {message}")),
    };

    ErrorNotice { message, severity }
}

impl From<&FetchError> for ErrorNotice {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Connection { endpoint, .. } if !endpoint.is_empty() => ErrorNotice {
                message: format!(
                    "Cannot connect to server. Please ensure the backend is running at {endpoint}."
                ),
                severity: Severity::Error,
            },
            _ => error_notice(err.status(), err.code(), &err.to_string()),
        }
    }
}
