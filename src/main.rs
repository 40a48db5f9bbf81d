use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use petagenda_api::config::ApiConfig;
use petagenda_core::clock::SystemClock;
use petagenda_db::{create_pool, schema::initialize_database, PgAppointmentRepository};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    let appointments = Arc::new(PgAppointmentRepository::new(db_pool));

    // Start API server
    petagenda_api::start_server(config, appointments, Arc::new(SystemClock)).await?;

    Ok(())
}
