//! Domain model for surveyed house numbers: one immutable record tying
//! a printed number to a street and a position in decimal degrees.

mod models;

pub use crate::models::HouseNumber;
