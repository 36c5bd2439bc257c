//! Error types for the workspace client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Workspace configuration that cannot produce a dashboard URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid workspace configuration: {reason}")]
pub struct ConfigError {
    /// What is wrong with the configured workspace URL
    pub reason: String,
}

impl ConfigError {
    /// Create a configuration error
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when triggering a run
///
/// Every failure of a trigger call is returned as one of these kinds; the
/// client never panics and never lets a transport fault escape uncaught.
/// Each HTTP status class maps to its own kind so callers can branch on
/// remediation: fix credentials, fix the job id, or retry later.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Credentials rejected by the control plane (401/403)
    #[error("authentication failed (status {status}): {message}")]
    Authentication {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Job id unknown to the control plane (404)
    #[error("job not found: {message}")]
    NotFound {
        /// Error message from the API
        message: String,
    },

    /// Control plane fault (5xx)
    #[error("remote server error (status {status}): {message}")]
    RemoteServer {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Any other non-2xx status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Connection failure or timeout
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose body carries no usable run id
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Dashboard URL could not be derived from the configured workspace URL
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Map a non-success HTTP status and response body to an error kind
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Authentication { status, message },
            404 => Self::NotFound { message },
            500..=599 => Self::RemoteServer { status, message },
            _ => Self::Api { status, message },
        }
    }

    /// Check if this error is an authentication failure
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication { .. })
    }

    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a server-side error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::RemoteServer { .. })
    }
}
