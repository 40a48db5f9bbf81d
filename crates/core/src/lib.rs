//! # PetAgenda Core
//!
//! Scheduling rules for the grooming shop's agenda:
//!
//! - [`slots`]: the bookable times of a business day
//! - [`validation`]: whether a chosen date and slot is still in the future
//! - [`classifier`]: grouping stored appointments into morning, afternoon
//!   and evening sections
//! - [`booking`]: the full booking form check built on the three above
//!
//! Everything here is synchronous and side-effect free. The current time is
//! always supplied by the caller, usually through a [`clock::Clock`].

pub mod booking;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod errors;
pub mod models;
pub mod slots;
pub mod validation;
