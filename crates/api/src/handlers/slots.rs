use axum::{extract::State, Json};
use petagenda_core::models::time_slot::TimeSlot;
use std::sync::Arc;

use crate::ApiState;

/// Lists the bookable times of day, e.g. `["09:00", "09:30", ..., "21:00"]`.
pub async fn list_slots(State(state): State<Arc<ApiState>>) -> Json<Vec<TimeSlot>> {
    Json(state.catalog.slots().to_vec())
}
