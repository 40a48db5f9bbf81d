pub mod appointment;
pub mod period;
pub mod time_slot;
