//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! handler reports failures the same way.
//!
//! Booking form failures carry one entry per offending field, letting the
//! client attach each message to its input:
//!
//! ```json
//! { "error": "Invalid appointment form: time: ...",
//!   "fields": [{ "field": "time", "message": "O horário não pode ser no passado" }] }
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use petagenda_core::errors::AgendaError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub AgendaError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();

        match self.0 {
            AgendaError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AgendaError::Validation(_) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            AgendaError::InvalidForm(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": message, "fields": fields })),
            )
                .into_response(),
            AgendaError::Database(_) => {
                error!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}

/// Allows `?` on `AgendaResult` inside handlers.
impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as database errors, so handlers can apply
/// `?` directly to repository calls.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AgendaError::from(err))
    }
}
