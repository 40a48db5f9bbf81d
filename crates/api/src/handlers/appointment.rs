//! # Appointment Handlers
//!
//! The agenda view and the booking endpoint. Listing always answers with the
//! three period sections, even when some are empty; hiding empty sections is
//! left to the client.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use petagenda_core::{
    errors::AgendaError,
    models::appointment::{AppointmentWithDetails, CreateAppointmentRequest, PeriodSection},
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<PeriodSection>>, AppError> {
    let appointments = state
        .appointments
        .list_appointments()
        .await?;

    debug!("Building agenda sections for {} appointments", appointments.len());

    Ok(Json(state.classifier.build_sections(&appointments)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<AppointmentWithDetails>, AppError> {
    let appointment = state
        .appointments
        .get_appointment(id)
        .await?
        .ok_or_else(|| AgendaError::NotFound(format!("Appointment with ID {} not found", id)))?;

    Ok(Json(state.classifier.project(&appointment)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<AppointmentWithDetails>), AppError> {
    let now = state.clock.now();

    let new_appointment = state.booking.validate(payload, now).map_err(|errors| {
        warn!("Rejected booking with {} field error(s)", errors.len());
        AgendaError::InvalidForm(errors)
    })?;

    let created = state
        .appointments
        .create_appointment(new_appointment)
        .await?;

    info!("Booked appointment {} at {}", created.id, created.schedule_at);

    Ok((StatusCode::CREATED, Json(state.classifier.project(&created))))
}
