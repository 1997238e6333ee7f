//! Booking model.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A member's booking of a class on a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub member_name: String,
    pub class_date: NaiveDate,
    /// Lower-cased class name.
    pub class_name: String,
}

/// Bookings for one date, grouped by class name in insertion order.
pub type BookingsByClass = BTreeMap<String, Vec<Booking>>;

/// A validated request to book a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub class_name: String,
    pub member_name: String,
    pub class_date: NaiveDate,
}

impl NewBooking {
    pub fn new(
        class_name: impl Into<String>,
        member_name: impl Into<String>,
        class_date: NaiveDate,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            member_name: member_name.into(),
            class_date,
        }
    }
}

/// How the ledger treated the catalog check when recording a booking.
///
/// The ledger only consults the catalog for the first booking of a
/// (date, class) pair. Bookings are recorded in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCheck {
    /// First booking for the pair and a class window covers the date.
    Matched,
    /// First booking for the pair and no class window covers the date.
    Unmatched,
    /// The pair already had bookings, so the catalog was not consulted.
    Bypassed,
}

/// A recorded booking together with the outcome of the window check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingReceipt {
    pub booking: Booking,
    pub window_check: WindowCheck,
}
