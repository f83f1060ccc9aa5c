use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::upstream::UpstreamError;

pub type AppResult<T> = Result<T, AppError>;

const GENERIC_UPSTREAM_MESSAGE: &str = "internal server error";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("upstream error")]
    Upstream(#[from] UpstreamError),
    #[error("internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Upstream(err) => match err.status_code() {
                Some(401) => StatusCode::UNAUTHORIZED,
                Some(403) => StatusCode::FORBIDDEN,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response body. Upstream and internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg) => msg.clone(),
            AppError::Upstream(err) => match err.status_code() {
                Some(401) => "unauthorized".to_string(),
                Some(403) => "forbidden".to_string(),
                _ => GENERIC_UPSTREAM_MESSAGE.to_string(),
            },
            AppError::Configuration(_) | AppError::Internal(_) => GENERIC_UPSTREAM_MESSAGE.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Upstream(err) => {
                tracing::error!(error = %err, status = %status, "upstream call failed");
            }
            AppError::Configuration(msg) | AppError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
            }
            _ => {
                tracing::debug!(status = %status, error = %self, "request rejected");
            }
        }

        let payload = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(payload)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_hide_details() {
        let err = AppError::from(UpstreamError::Status {
            status: 502,
            body: "relation \"ganhadores\" does not exist".to_string(),
        });

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), GENERIC_UPSTREAM_MESSAGE);
    }

    #[test]
    fn upstream_auth_statuses_pass_through() {
        let unauthorized = AppError::from(UpstreamError::Status {
            status: 401,
            body: "JWT expired".to_string(),
        });
        let forbidden = AppError::from(UpstreamError::Status {
            status: 403,
            body: "permission denied for table".to_string(),
        });

        assert_eq!(unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
        assert!(!unauthorized.public_message().contains("JWT"));
    }

    #[test]
    fn client_errors_keep_their_message() {
        let err = AppError::not_found("influencer not found");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "influencer not found");
    }
}
