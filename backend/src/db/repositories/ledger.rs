//! In-memory booking ledger.
//!
//! Bookings are indexed by canonical date string, then by class name, with
//! insertion order preserved inside each class. That shape answers "who is
//! booked into what on day D" with a single lookup.
//!
//! # Window check
//!
//! The ledger consults the [`ClassCatalog`] only when it sees the first
//! booking for a (date, class) pair. Whatever the outcome, the booking is
//! recorded; later bookings for the same pair skip the catalog entirely. The
//! outcome is reported through [`WindowCheck`] so callers can log or surface
//! it.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use super::catalog::ClassCatalog;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{
    date_key, normalize_class_name, Booking, BookingReceipt, BookingsByClass, NewBooking,
    WindowCheck,
};

/// Message returned when a date has no bookings.
pub const NO_BOOKINGS_MESSAGE: &str = "no bookings available for the selected date";

/// Date-indexed booking store.
///
/// Lock order: the ledger's lock is taken first, then the catalog's read lock.
/// The catalog never takes the ledger's lock.
pub struct BookingLedger {
    catalog: Arc<ClassCatalog>,
    index: RwLock<HashMap<String, BookingsByClass>>,
}

impl BookingLedger {
    /// Create an empty ledger that checks windows against `catalog`.
    pub fn new(catalog: Arc<ClassCatalog>) -> Self {
        Self {
            catalog,
            index: RwLock::new(HashMap::new()),
        }
    }

    /// Record a booking. The whole check-then-append runs under the write lock.
    pub fn book_class(&self, new_booking: NewBooking) -> BookingReceipt {
        let class_name = normalize_class_name(&new_booking.class_name);
        let key = date_key(new_booking.class_date);
        let booking = Booking {
            member_name: new_booking.member_name,
            class_date: new_booking.class_date,
            class_name: class_name.clone(),
        };

        let mut index = self.index.write();
        let by_class = index.entry(key).or_default();

        let window_check = if by_class.contains_key(&class_name) {
            WindowCheck::Bypassed
        } else if self
            .catalog
            .find_active(&class_name, booking.class_date)
            .is_some()
        {
            WindowCheck::Matched
        } else {
            WindowCheck::Unmatched
        };

        by_class.entry(class_name).or_default().push(booking.clone());

        BookingReceipt {
            booking,
            window_check,
        }
    }

    /// Snapshot of all bookings on `date`, grouped by class name.
    pub fn bookings_on(&self, date: NaiveDate) -> RepositoryResult<BookingsByClass> {
        let key = date_key(date);
        self.index
            .read()
            .get(&key)
            .filter(|by_class| !by_class.is_empty())
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    NO_BOOKINGS_MESSAGE,
                    ErrorContext::new("get_bookings_by_date")
                        .with_entity("booking")
                        .with_entity_id(key),
                )
            })
    }

    /// Number of distinct dates with bookings.
    pub fn date_count(&self) -> usize {
        self.index
            .read()
            .values()
            .filter(|by_class| !by_class.is_empty())
            .count()
    }

    /// The catalog this ledger checks windows against.
    pub fn catalog(&self) -> &Arc<ClassCatalog> {
        &self.catalog
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod ledger_tests;
