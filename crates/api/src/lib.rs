//! # PetAgenda API
//!
//! HTTP surface for the grooming shop's agenda. It exposes the bookable
//! slots, the day's appointments grouped into morning, afternoon and evening
//! sections, and appointment creation.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the scheduling core
//! - **Middleware**: Error-to-response mapping
//! - **Config**: Environment-driven server and schedule settings
//!
//! Storage sits behind [`AppointmentRepository`] and the current time behind
//! [`Clock`], so the whole router can run against mocks in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error mapping shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use eyre::Result;
use petagenda_core::{
    booking::BookingForm, classifier::AppointmentClassifier, clock::Clock, config::ScheduleConfig,
    slots::SlotCatalog,
};
use petagenda_db::AppointmentRepository;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Holds the storage and clock seams plus the scheduling components, all
/// derived from one [`ScheduleConfig`] so the slots offered, the slots
/// accepted and the agenda sections agree with each other.
///
/// # Example
///
/// ```ignore
/// let repo: Arc<dyn AppointmentRepository> = Arc::new(PgAppointmentRepository::new(pool));
/// let state = Arc::new(ApiState::new(repo, Arc::new(SystemClock), &ScheduleConfig::default()));
/// let app = build_router(state);
/// ```
pub struct ApiState {
    /// Appointment storage
    pub appointments: Arc<dyn AppointmentRepository>,
    /// Source of "now" for booking validation
    pub clock: Arc<dyn Clock>,
    /// Bookable times served by `GET /api/slots`
    pub catalog: SlotCatalog,
    /// Groups listed appointments into period sections
    pub classifier: AppointmentClassifier,
    /// Validates incoming booking requests
    pub booking: BookingForm,
}

impl ApiState {
    /// Builds the state for a router
    ///
    /// # Arguments
    ///
    /// * `appointments` - Repository used by the appointment handlers
    /// * `clock` - Clock consulted when validating a booking
    /// * `schedule` - Opening hours and period ranges for the catalog, classifier and booking form
    pub fn new(
        appointments: Arc<dyn AppointmentRepository>,
        clock: Arc<dyn Clock>,
        schedule: &ScheduleConfig,
    ) -> Self {
        Self {
            appointments,
            clock,
            catalog: SlotCatalog::new(schedule),
            classifier: AppointmentClassifier::new(schedule),
            booking: BookingForm::new(schedule),
        }
    }
}

/// Builds the application router with all routes attached to `state`
///
/// No layers are applied here; [`start_server`] adds CORS, timeout and
/// tracing on top, while tests drive the bare router.
///
/// # Arguments
///
/// * `state` - Shared state handed to every handler
///
/// # Returns
///
/// * `Router` - Health, slot and appointment routes, ready to serve
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Bookable slots
        .merge(routes::slots::routes())
        // Appointment agenda and booking
        .merge(routes::appointment::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and repository
///
/// Installs the tracing subscriber, builds the router, applies CORS and
/// timeout layers, then serves until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port and schedule settings
/// * `appointments` - Appointment storage
/// * `clock` - Clock used to reject bookings in the past
///
/// # Returns
///
/// * `Result<()>` - Error if the subscriber, listener or server fails
///
/// # Example
///
/// ```ignore
/// let config = ApiConfig::from_env()?;
/// let pool = create_pool(&config.database_url).await?;
/// start_server(config, Arc::new(PgAppointmentRepository::new(pool)), Arc::new(SystemClock)).await?;
/// ```
pub async fn start_server(
    config: config::ApiConfig,
    appointments: Arc<dyn AppointmentRepository>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(appointments, clock, &config.schedule));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {:?}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    let app = app
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
