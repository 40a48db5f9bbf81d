//! Source of "now" for booking validation.
//!
//! Validation never samples the wall clock itself; callers hand it a
//! [`Clock`] so repeated checks with the same clock are reproducible.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

pub trait Clock: Send + Sync {
    /// Current naive local date-time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
