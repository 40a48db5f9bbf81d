//! # Appointment Classifier
//!
//! Turns a list of stored appointments into the three agenda sections shown
//! to staff. Each appointment is projected with its display time and period,
//! then partitioned by period. The partition is stable: appointments keep
//! their input order inside a section, and no sorting happens here. The
//! repository hands them over already ordered by `schedule_at`.
//!
//! Hours in the morning range map to Morning, hours in the afternoon range
//! map to Afternoon, and every other hour (noon, early morning, late
//! evening, out-of-range values) falls into Evening.

use chrono::Timelike;

use crate::config::ScheduleConfig;
use crate::models::appointment::{Appointment, AppointmentWithDetails, PeriodSection};
use crate::models::period::Period;

/// Period classification and agenda sections for one schedule configuration.
///
/// The default uses the shop's standard ranges (09h-12h, 13h-18h, 19h-21h).
#[derive(Debug, Clone, Default)]
pub struct AppointmentClassifier {
    config: ScheduleConfig,
}

impl AppointmentClassifier {
    /// # Arguments
    ///
    /// * `config` - Supplies the morning and afternoon ranges used for
    ///   classification and the labels of all three sections
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Maps an hour of the day to its period. Never fails; any hour outside
    /// the morning and afternoon ranges is Evening.
    pub fn classify_period(&self, hour: u32) -> Period {
        if self.config.morning_range.contains(hour) {
            Period::Morning
        } else if self.config.afternoon_range.contains(hour) {
            Period::Afternoon
        } else {
            Period::Evening
        }
    }

    /// Adds the display time (`HH:MM`), service and period to an appointment.
    pub fn project(&self, appointment: &Appointment) -> AppointmentWithDetails {
        AppointmentWithDetails {
            time: appointment.schedule_at.format("%H:%M").to_string(),
            service: appointment.description.clone(),
            period: self.classify_period(appointment.schedule_at.hour()),
            appointment: appointment.clone(),
        }
    }

    /// Always returns Morning, Afternoon and Evening sections in that order,
    /// empty ones included.
    pub fn build_sections(&self, appointments: &[Appointment]) -> Vec<PeriodSection> {
        let projected: Vec<AppointmentWithDetails> =
            appointments.iter().map(|a| self.project(a)).collect();

        Period::ALL
            .into_iter()
            .map(|period| PeriodSection {
                title: period.title().to_string(),
                kind: period,
                time_range: self.time_range(period),
                appointments: projected
                    .iter()
                    .filter(|details| details.period == period)
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    fn time_range(&self, period: Period) -> String {
        match period {
            Period::Morning => self.config.morning_range.label(),
            Period::Afternoon => self.config.afternoon_range.label(),
            Period::Evening => self.config.evening_range.label(),
        }
    }
}

pub fn classify_period(hour: u32) -> Period {
    AppointmentClassifier::default().classify_period(hour)
}

pub fn project(appointment: &Appointment) -> AppointmentWithDetails {
    AppointmentClassifier::default().project(appointment)
}

pub fn build_sections(appointments: &[Appointment]) -> Vec<PeriodSection> {
    AppointmentClassifier::default().build_sections(appointments)
}
