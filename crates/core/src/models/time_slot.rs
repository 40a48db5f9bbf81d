use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::SlotError;

/// Booking granularity in minutes. Every slot starts on a multiple of this.
pub const SLOT_GRANULARITY_MINUTES: u32 = 30;

/// A bookable time of day.
///
/// Ordering, equality and the `HH:MM` text form all agree, so a slot can be
/// used directly as a sort key or a select value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Result<Self, SlotError> {
        if hour > 23 {
            return Err(SlotError::HourOutOfRange(hour));
        }
        if minute >= 60 || minute % SLOT_GRANULARITY_MINUTES != 0 {
            return Err(SlotError::MinuteOffGrid(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        // Fields are range-checked in `new`.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Combines a calendar date with this slot, seconds zeroed.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.as_naive_time())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = SlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SlotError::Malformed(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(malformed());
        }
        let hour = hour.parse::<u32>().map_err(|_| malformed())?;
        let minute = minute.parse::<u32>().map_err(|_| malformed())?;

        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}
