use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/appointments",
            get(handlers::appointment::list_appointments).post(handlers::appointment::create_appointment),
        )
        .route("/api/appointments/:id", get(handlers::appointment::get_appointment))
}
