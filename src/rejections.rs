use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::answer::ValidationError;

#[derive(Debug)]
pub enum AppError {
    /// The payload failed answer validation; the mutation is rejected.
    InvalidPayload(ValidationError),
    Input(&'static str),
    NotFound,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidPayload(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, kind, reason) = match self {
            Self::InvalidPayload(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", err.to_string())
            }
            Self::Input(reason) => (StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", reason.to_string()),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "ROUTE_NOT_FOUND",
                "not found".to_string(),
            ),
        };

        let body = json!({
            "errors": [{
                "message": reason,
                "extensions": { "code": kind, "reason": reason },
            }]
        });

        (code, Json(body)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error and turn it into a 400 carrying `msg`.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}
