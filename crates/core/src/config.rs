//! # Schedule Configuration
//!
//! Boundary values for the booking day and the agenda periods. The defaults
//! describe the shop's opening hours: slots every 30 minutes from 09:00 to
//! 21:00, morning 09h-12h, afternoon 13h-18h and evening 19h-21h.
//!
//! The morning and afternoon ranges drive classification. The evening range
//! only labels its section; evening also collects every hour outside the
//! other two ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AgendaError;
use crate::models::time_slot::SLOT_GRANULARITY_MINUTES;

/// Half-open range of hours, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

impl HourRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start && hour < self.end
    }

    /// Display label, e.g. `09h-12h`.
    pub fn label(&self) -> String {
        format!("{:02}h-{:02}h", self.start, self.end)
    }
}

impl fmt::Display for HourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for HourRange {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AgendaError::Validation(format!("Invalid hour range {s:?}, expected START-END"));

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;

        Ok(Self { start, end })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub morning_range: HourRange,
    pub afternoon_range: HourRange,
    pub evening_range: HourRange,
    /// First bookable hour.
    pub slot_start: u32,
    /// Last bookable hour. Only minute 0 of this hour is offered.
    pub slot_end: u32,
    pub slot_step_minutes: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            morning_range: HourRange::new(9, 12),
            afternoon_range: HourRange::new(13, 18),
            evening_range: HourRange::new(19, 21),
            slot_start: 9,
            slot_end: 21,
            slot_step_minutes: 30,
        }
    }
}

impl ScheduleConfig {
    /// Checks that the slot bounds and step can produce valid `TimeSlot`s
    /// and that every range is well formed.
    pub fn validate(&self) -> Result<(), AgendaError> {
        let step = self.slot_step_minutes;
        if step == 0 || step % SLOT_GRANULARITY_MINUTES != 0 || 60 % step != 0 {
            return Err(AgendaError::Validation(format!(
                "slot_step_minutes must be a multiple of {SLOT_GRANULARITY_MINUTES} that divides an hour, got {step}"
            )));
        }

        if self.slot_end > 23 || self.slot_start > self.slot_end {
            return Err(AgendaError::Validation(format!(
                "slot hours must satisfy start <= end <= 23, got {}..={}",
                self.slot_start, self.slot_end
            )));
        }

        for (name, range) in [
            ("morning_range", self.morning_range),
            ("afternoon_range", self.afternoon_range),
            ("evening_range", self.evening_range),
        ] {
            if range.start >= range.end || range.end > 24 {
                return Err(AgendaError::Validation(format!("{name} {range} is not a valid hour range")));
            }
        }

        Ok(())
    }
}
