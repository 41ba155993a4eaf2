//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Load-time errors. All of these are contained inside `ConfigStore::load`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config source {origin} unavailable: {reason}")]
    SourceUnavailable { origin: String, reason: String },
    #[error("organization '{tenant}': missing required field '{field}'")]
    MissingField { tenant: String, field: &'static str },
    #[error("organization '{tenant}': invalid shape: {reason}")]
    InvalidShape { tenant: String, reason: String },
}

impl ConfigError {
    /// True for per-tenant validation failures (the tenant is skipped, siblings still load).
    pub fn is_validation(&self) -> bool {
        matches!(self, ConfigError::MissingField { .. } | ConfigError::InvalidShape { .. })
    }
}

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("document rejected: {0}")]
    Rejected(String),
    #[error("knowledge store: {0}")]
    Store(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("profile not implemented: {0}")]
    ProfileNotImplemented(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::ProfileNotImplemented(_) => (StatusCode::NOT_FOUND, "profile_not_implemented"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Knowledge(KnowledgeError::Rejected(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "document_rejected")
            }
            AppError::Knowledge(KnowledgeError::Store(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "knowledge_error")
            }
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
