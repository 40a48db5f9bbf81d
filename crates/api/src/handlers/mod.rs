pub mod appointment;
pub mod slots;
