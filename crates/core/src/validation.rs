//! # Schedule Validation
//!
//! Decides whether a candidate (date, slot) pair is an acceptable future
//! appointment time. Two rules apply, in this order:
//!
//! 1. The calendar date must not be before today's date (start-of-day
//!    comparison). Failure is reported against the date field.
//! 2. The date combined with the slot must be strictly after `now`.
//!    Failure is reported against the time field.
//!
//! A date error takes precedence when both rules fail.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::models::time_slot::TimeSlot;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionKind {
    #[error("A data não pode ser no passado")]
    DateInPast,
    #[error("O horário não pode ser no passado")]
    TimeInPast,
}

/// Form field a rejection attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleField {
    Date,
    Time,
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleField::Date => f.write_str("date"),
            ScheduleField::Time => f.write_str("time"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}")]
pub struct ScheduleRejection {
    pub kind: RejectionKind,
    pub field: ScheduleField,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Accepted,
    Rejected(ScheduleRejection),
}

impl ScheduleOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ScheduleOutcome::Accepted)
    }

    pub fn into_result(self) -> Result<(), ScheduleRejection> {
        match self {
            ScheduleOutcome::Accepted => Ok(()),
            ScheduleOutcome::Rejected(rejection) => Err(rejection),
        }
    }
}

/// Rule 1 alone: rejects a calendar date before `now`'s date.
///
/// Useful when no slot is available yet to run the full [`validate`].
pub fn check_date(date: NaiveDate, now: NaiveDateTime) -> ScheduleOutcome {
    if date < now.date() {
        ScheduleOutcome::Rejected(ScheduleRejection {
            kind: RejectionKind::DateInPast,
            field: ScheduleField::Date,
        })
    } else {
        ScheduleOutcome::Accepted
    }
}

pub fn validate(date: NaiveDate, slot: TimeSlot, now: NaiveDateTime) -> ScheduleOutcome {
    if let rejected @ ScheduleOutcome::Rejected(_) = check_date(date, now) {
        return rejected;
    }

    if slot.on(date) <= now {
        return ScheduleOutcome::Rejected(ScheduleRejection {
            kind: RejectionKind::TimeInPast,
            field: ScheduleField::Time,
        });
    }

    ScheduleOutcome::Accepted
}

/// [`validate`] bound to an injected clock.
#[derive(Debug, Clone)]
pub struct ScheduleValidator<C> {
    clock: C,
}

impl<C: Clock> ScheduleValidator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn check(&self, date: NaiveDate, slot: TimeSlot) -> ScheduleOutcome {
        validate(date, slot, self.clock.now())
    }
}
