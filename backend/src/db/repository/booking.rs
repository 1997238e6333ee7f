//! Booking ledger repository trait.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::error::RepositoryResult;
use crate::models::{BookingReceipt, BookingsByClass, NewBooking};

/// Repository trait for the booking ledger.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Record a booking.
    ///
    /// Never rejects a booking: the catalog is consulted only for the first
    /// booking of a (date, class) pair, and the outcome is reported in the
    /// receipt rather than enforced.
    async fn book_class(&self, new_booking: NewBooking) -> RepositoryResult<BookingReceipt>;

    /// Fetch all bookings on `date`, grouped by class name.
    ///
    /// # Returns
    /// * `Ok(BookingsByClass)` - A snapshot of the bookings for that date
    /// * `Err(RepositoryError::NotFound)` - If nobody booked anything that day
    async fn get_bookings_by_date(&self, date: NaiveDate) -> RepositoryResult<BookingsByClass>;

    /// Number of distinct dates with at least one booking.
    async fn booking_date_count(&self) -> RepositoryResult<usize>;
}
