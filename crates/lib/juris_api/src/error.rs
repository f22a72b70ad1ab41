//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use juris_core::llm::LlmError;
use juris_core::models::ErrorResponse;
use juris_core::search::SearchError;
use thiserror::Error;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid messages: {0}")]
    InvalidMessages(String),

    #[error("Invalid courts: {0}")]
    InvalidCourts(String),

    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidMessages(_) | AppError::InvalidCourts(_) => StatusCode::BAD_REQUEST,
            AppError::Provider(_) | AppError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (error, details) = match &self {
            AppError::InvalidMessages(m) => ("Mensagens inválidas", m.clone()),
            AppError::InvalidCourts(m) => ("Tribunais inválidos", m.clone()),
            AppError::Provider(e) => ("Erro ao processar solicitação", e.to_string()),
            AppError::Search(e) => ("Erro ao processar solicitação", e.to_string()),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            details: Some(details),
        });
        (self.status(), body).into_response()
    }
}
