//! # Booking Form
//!
//! Validates a `CreateAppointmentRequest` the way the booking dialog does:
//! minimum lengths on the contact fields, a time picked from the slot
//! catalog, and the schedule rules from [`crate::validation`]. Every failing
//! field is reported, not just the first one.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::models::appointment::{CreateAppointmentRequest, NewAppointment};
use crate::models::time_slot::TimeSlot;
use crate::slots::SlotCatalog;
use crate::validation::{self, ScheduleField, ScheduleOutcome, ScheduleRejection};

const MIN_NAME_LEN: usize = 3;
const MIN_PHONE_LEN: usize = 11;
const MIN_DESCRIPTION_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    TutorName,
    PetName,
    Phone,
    Description,
    ScheduleAt,
    Time,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormField::TutorName => "tutorName",
            FormField::PetName => "petName",
            FormField::Phone => "phone",
            FormField::Description => "description",
            FormField::ScheduleAt => "scheduleAt",
            FormField::Time => "time",
        };
        f.write_str(name)
    }
}

impl From<ScheduleField> for FormField {
    fn from(field: ScheduleField) -> Self {
        match field {
            ScheduleField::Date => FormField::ScheduleAt,
            ScheduleField::Time => FormField::Time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl From<ScheduleRejection> for FieldError {
    fn from(rejection: ScheduleRejection) -> Self {
        FieldError::new(rejection.field.into(), rejection.kind.to_string())
    }
}

impl FieldError {
    fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookingForm {
    catalog: SlotCatalog,
}

impl BookingForm {
    pub fn new(config: &ScheduleConfig) -> Self {
        Self {
            catalog: SlotCatalog::new(config),
        }
    }

    /// Checks `request` against the form rules with `now` as the present.
    ///
    /// # Returns
    ///
    /// * `Ok(NewAppointment)` - Ready to persist, `schedule_at` at whole minutes
    /// * `Err(Vec<FieldError>)` - One entry per failing rule, in form order
    pub fn validate(
        &self,
        request: CreateAppointmentRequest,
        now: NaiveDateTime,
    ) -> Result<NewAppointment, Vec<FieldError>> {
        let mut errors = Vec::new();

        if !has_min_chars(&request.tutor_name, MIN_NAME_LEN) {
            errors.push(FieldError::new(FormField::TutorName, "O nome do tutor é obrigatório"));
        }
        if !has_min_chars(&request.pet_name, MIN_NAME_LEN) {
            errors.push(FieldError::new(FormField::PetName, "O nome do pet é obrigatório"));
        }
        if !has_min_chars(&request.phone, MIN_PHONE_LEN) {
            errors.push(FieldError::new(FormField::Phone, "O telefone é obrigatório"));
        }
        if !has_min_chars(&request.description, MIN_DESCRIPTION_LEN) {
            errors.push(FieldError::new(FormField::Description, "A descrição é obrigatória"));
        }

        let slot = self.parse_slot(&request.time);

        let schedule_at = match (request.date, &slot) {
            (None, _) => {
                errors.push(FieldError::new(FormField::ScheduleAt, "A data é obrigatória"));
                None
            }
            (Some(date), Ok(slot)) => match validation::validate(date, *slot, now) {
                ScheduleOutcome::Accepted => Some(slot.on(date)),
                ScheduleOutcome::Rejected(rejection) => {
                    errors.push(rejection.into());
                    None
                }
            },
            // The date rule does not depend on the time, so it still runs.
            (Some(date), Err(_)) => {
                if let ScheduleOutcome::Rejected(rejection) = validation::check_date(date, now) {
                    errors.push(rejection.into());
                }
                None
            }
        };

        if let Err(error) = slot {
            errors.push(error);
        }

        match schedule_at {
            Some(schedule_at) if errors.is_empty() => Ok(NewAppointment {
                tutor_name: request.tutor_name,
                pet_name: request.pet_name,
                phone: request.phone,
                description: request.description,
                schedule_at,
            }),
            _ => Err(errors),
        }
    }

    fn parse_slot(&self, time: &str) -> Result<TimeSlot, FieldError> {
        if time.is_empty() {
            return Err(FieldError::new(FormField::Time, "A hora é obrigatória"));
        }

        match time.parse::<TimeSlot>() {
            Ok(slot) if self.catalog.contains(&slot) => Ok(slot),
            _ => Err(FieldError::new(FormField::Time, "Horário indisponível")),
        }
    }
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new(&ScheduleConfig::default())
    }
}
