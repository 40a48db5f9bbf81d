//! # Slot Catalog
//!
//! Enumerates the bookable times of a business day. Each hour from
//! `slot_start` through `slot_end` contributes one slot per step, except the
//! closing hour, which only offers its `:00` slot. With the default
//! configuration this yields 09:00, 09:30, ..., 20:30, 21:00.

use crate::config::ScheduleConfig;
use crate::models::time_slot::TimeSlot;

/// Ordered, duplicate-free list of the day's bookable slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalog {
    slots: Vec<TimeSlot>,
}

impl SlotCatalog {
    /// Builds the catalog for `config`. Hours or offsets that cannot form a
    /// valid `TimeSlot` are skipped; run `ScheduleConfig::validate` first to
    /// reject such configurations outright.
    pub fn new(config: &ScheduleConfig) -> Self {
        let step = config.slot_step_minutes.max(1) as usize;
        let mut slots = Vec::new();

        for hour in config.slot_start..=config.slot_end {
            for minute in (0..60).step_by(step) {
                if let Ok(slot) = TimeSlot::new(hour, minute) {
                    slots.push(slot);
                }
                // The closing hour stops after its first slot.
                if hour == config.slot_end {
                    break;
                }
            }
        }

        Self { slots }
    }

    /// Slots in ascending order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Whether `slot` is offered, used to reject hand-typed booking times.
    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.binary_search(slot).is_ok()
    }

    pub fn into_slots(self) -> Vec<TimeSlot> {
        self.slots
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::new(&ScheduleConfig::default())
    }
}

/// Bookable slots for the default shop hours.
pub fn generate_slots() -> Vec<TimeSlot> {
    SlotCatalog::default().into_slots()
}
