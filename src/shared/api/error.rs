// src/shared/api/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Closed set of API failures. Status mapping lives here, not in handlers.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Malformed input (bad email, unparseable body field).
    #[error("{0}")]
    Validation(String),

    /// Syntactically fine input outside the accepted value set.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    /// Store failed or did not acknowledge a write. Carries only the
    /// public per-operation message; the cause is already logged.
    #[error("{0}")]
    Store(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{what} not found"))
    }

    /// Logs the underlying cause server-side and keeps the client-visible
    /// message generic.
    pub fn store(public: &'static str, cause: impl std::fmt::Display) -> Self {
        error!("{public}: {cause}");
        ApiError::Store(public.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_is_fixed() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::InvalidArgument("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found("Message").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_message_names_the_resource() {
        assert_eq!(ApiError::not_found("Project").to_string(), "Project not found");
    }

    #[test]
    fn store_error_hides_the_cause() {
        let err = ApiError::store("Failed to fetch portfolio data", "connection reset");
        assert_eq!(err.to_string(), "Failed to fetch portfolio data");
    }
}
