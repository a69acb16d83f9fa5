//! Row types and input DTOs.

pub mod category;
pub mod coerce;
pub mod question;
