use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::api::helpers::message_response;

pub const GITHUB_FAILURE_MESSAGE: &str = "Failed to fetch GitHub repositories";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Record already exists: {0}")]
    Conflict(String),

    /// Raised by durable backends on I/O failure; the in-memory store never fails.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("GitHub API error: {status} {body}")]
    Upstream { status: u16, body: String },

    #[error("Failed to reach GitHub: {0}")]
    UpstreamFailure(String),

    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StorageError,
    },
}

impl ApiError {
    pub fn storage(context: &'static str, source: StorageError) -> Self {
        ApiError::Storage { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::UpstreamFailure(_) | ApiError::Storage { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message the caller sees. Internal failures collapse to a fixed
    /// text; the detail only goes to the log.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::UpstreamFailure(_) => GITHUB_FAILURE_MESSAGE.to_string(),
            ApiError::Storage { context, .. } => (*context).to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::UpstreamFailure(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        message_response(status, &self.public_message())
    }
}
