use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::period::Period;

/// A stored grooming appointment. `schedule_at` is naive local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub tutor_name: String,
    pub pet_name: String,
    pub phone: String,
    pub description: String,
    pub schedule_at: NaiveDateTime,
}

/// Fields for an appointment that passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub tutor_name: String,
    pub pet_name: String,
    pub phone: String,
    pub description: String,
    pub schedule_at: NaiveDateTime,
}

/// Booking form payload: a calendar date plus a slot picked from the catalog.
///
/// Every field may be absent on the wire. Missing text fields arrive empty
/// and a missing date arrives as `None`, so the booking form reports them
/// per field instead of the whole body being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateAppointmentRequest {
    pub tutor_name: String,
    pub pet_name: String,
    pub phone: String,
    pub description: String,
    #[serde(rename = "scheduleAt")]
    pub date: Option<NaiveDate>,
    pub time: String,
}

/// Read-only projection of an [`Appointment`] with display fields. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentWithDetails {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub time: String,
    pub service: String,
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSection {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Period,
    pub time_range: String,
    pub appointments: Vec<AppointmentWithDetails>,
}
