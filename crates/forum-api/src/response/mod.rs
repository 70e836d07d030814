//! Response types and error handling for API endpoints
//!
//! Failures leave the API as a status code with a plain-text body; no
//! structured error payload is returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use forum_service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};
use validator::ValidationErrors;

/// API error type, one variant per HTTP outcome
#[derive(Debug, Error)]
pub enum ApiError {
    /// No usable session
    #[error("Unauthorized")]
    Unauthorized,

    /// Body could not be parsed or failed validation; carries the reason
    #[error("{0}")]
    Unprocessable(String),

    #[error("{0}")]
    Conflict(String),

    /// Anything else; only `context` reaches the client
    #[error("{context}")]
    Internal {
        context: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Create an unprocessable entity error
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    /// Create an internal error whose client-facing message is `context`
    pub fn internal(context: &'static str, err: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            context,
            source: err.into(),
        }
    }

    /// Replace the client-facing message of an internal error
    #[must_use]
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Internal { source, .. } => Self::Internal { context, source },
            other => other,
        }
    }

    /// Convert a service failure, reporting unexpected ones as `context`
    pub fn from_service(err: ServiceError, context: &'static str) -> Self {
        match err {
            ServiceError::Conflict(msg) => Self::Conflict(msg),
            other => Self::internal(context, other),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Unprocessable(errors.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { context, source } => {
                error!(error = ?source, context = %context, "Server error occurred");
            }
            Self::Unprocessable(reason) => warn!(%reason, "Rejected request body"),
            _ => {}
        }

        (status, self.to_string()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
