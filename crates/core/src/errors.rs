use thiserror::Error;

use crate::booking::FieldError;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid appointment form: {}", summarize(.0))]
    InvalidForm(Vec<FieldError>),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type AgendaResult<T> = Result<T, AgendaError>;

/// Errors raised while building or parsing a [`TimeSlot`](crate::models::time_slot::TimeSlot).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("hour {0} is outside 0-23")]
    HourOutOfRange(u32),

    #[error("minute {0} is not on a 30 minute boundary")]
    MinuteOffGrid(u32),

    #[error("malformed time slot {0:?}, expected HH:MM")]
    Malformed(String),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
