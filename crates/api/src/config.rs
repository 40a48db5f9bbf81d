//! # API Configuration Module
//!
//! Loads server and schedule settings from environment variables, with
//! defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `SCHEDULE_SLOT_START`, `SCHEDULE_SLOT_END`: First and last bookable hour (default: 9, 21)
//! - `SCHEDULE_SLOT_STEP_MINUTES`: Slot spacing (default: 30)
//! - `SCHEDULE_MORNING_RANGE`, `SCHEDULE_AFTERNOON_RANGE`, `SCHEDULE_EVENING_RANGE`:
//!   Period hour ranges as `START-END` (default: 9-12, 13-18, 19-21)

use eyre::{eyre, Result, WrapErr};
use petagenda_core::config::ScheduleConfig;
use std::env;
use std::str::FromStr;
use tracing::Level;

/// Configuration for the PetAgenda API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Opening hours and period boundaries
    pub schedule: ScheduleConfig,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - A SCHEDULE_* value cannot be parsed or describes an invalid schedule
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Example
    ///
    /// ```ignore
    /// let config = ApiConfig::from_lookup(|key| match key {
    ///     "DATABASE_URL" => Some("postgres://localhost/petagenda".to_string()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.port, 3000);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS")
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let schedule = schedule_from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            schedule,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn schedule_from_lookup<F>(lookup: &F) -> Result<ScheduleConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ScheduleConfig::default();

    let schedule = ScheduleConfig {
        morning_range: parse_or(lookup, "SCHEDULE_MORNING_RANGE", defaults.morning_range)?,
        afternoon_range: parse_or(lookup, "SCHEDULE_AFTERNOON_RANGE", defaults.afternoon_range)?,
        evening_range: parse_or(lookup, "SCHEDULE_EVENING_RANGE", defaults.evening_range)?,
        slot_start: parse_or(lookup, "SCHEDULE_SLOT_START", defaults.slot_start)?,
        slot_end: parse_or(lookup, "SCHEDULE_SLOT_END", defaults.slot_end)?,
        slot_step_minutes: parse_or(lookup, "SCHEDULE_SLOT_STEP_MINUTES", defaults.slot_step_minutes)?,
    };

    schedule.validate().wrap_err("Invalid schedule configuration")?;
    Ok(schedule)
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| eyre!("Invalid {} value {:?}", key, raw)),
        None => Ok(default),
    }
}
