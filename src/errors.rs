use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Message shown to callers for both parse and schema failures.
pub const INVALID_AI_JSON_MESSAGE: &str = "AI did not return valid JSON";

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    InputValidationError(String),

    #[error("Upstream generation error: {0}")]
    UpstreamGenerationError(String),

    #[error("{}", INVALID_AI_JSON_MESSAGE)]
    ParseError { candidate: String, reason: String },

    #[error("{}", INVALID_AI_JSON_MESSAGE)]
    SchemaError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::InputValidationError(_) => "INPUT_VALIDATION_ERROR",
            AppError::UpstreamGenerationError(_) => "UPSTREAM_GENERATION_ERROR",
            AppError::ParseError { .. } => "PARSE_ERROR",
            AppError::SchemaError(_) => "SCHEMA_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Server-side detail that is never sent to the caller.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            AppError::ParseError { candidate, reason } => {
                Some(format!("{} (candidate: {})", reason, candidate))
            }
            AppError::SchemaError(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::UpstreamGenerationError(_))
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InputValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ParseError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SchemaError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.diagnostic() {
            Some(detail) => log::warn!("[{}] {}: {}", self.error_code(), self, detail),
            None => log::warn!("[{}] {}", self.error_code(), self),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InputValidationError(err.to_string())
    }
}

impl From<crate::services::single_flight::FlightAborted> for AppError {
    fn from(err: crate::services::single_flight::FlightAborted) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::UpstreamGenerationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
