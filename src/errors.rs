use axum::{Json, http::StatusCode};
use serde::Serialize;
use thiserror::Error;

use crate::validation::FieldViolation;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid data")]
    Validation(Vec<FieldViolation>),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// JSON body for every non-200 response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldViolation>>,
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, Json<ErrorBody>) {
        match self {
            AppError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Invalid data".into(),
                    details: Some(details.clone()),
                }),
            ),
            // The inner message is for server logs only, never the wire.
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Internal server error".into(),
                    details: None,
                }),
            ),
        }
    }
}
