//! Domain models for the studio scheduler.
//!
//! - [`StudioClass`]: a named class running over an inclusive date window
//! - [`Booking`]: a member booked into a class on one calendar date
//! - Date helpers: the canonical `YYYY-MM-DD` representation used for indexing

#[macro_use]
pub mod macros;

pub mod booking;
pub mod class;

pub use booking::{Booking, BookingReceipt, BookingsByClass, NewBooking, WindowCheck};
pub use class::{ClassId, NewClass, StudioClass};

use chrono::NaiveDate;

/// Canonical date format for indexing, comparison and the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as its canonical `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a canonical `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Class names are case-insensitive; this is the stored form.
pub fn normalize_class_name(name: &str) -> String {
    name.to_lowercase()
}
