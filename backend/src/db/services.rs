//! High-level scheduling service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. The store itself
//! never logs; this layer records what happened and hands results back
//! unchanged.
//!
//! # Usage
//!
//! ```no_run
//! use studio_scheduler::db::{repositories::LocalRepository, services};
//! use studio_scheduler::models::NewClass;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let start = NaiveDate::from_ymd_opt(2030, 2, 1).unwrap();
//!     let end = NaiveDate::from_ymd_opt(2030, 2, 28).unwrap();
//!
//!     let class = services::create_class(&repo, NewClass::new("Yoga", start, end, 10)).await?;
//!     println!("Created class {} with id {}", class.name, class.id);
//!     Ok(())
//! }
//! ```

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{Booking, BookingsByClass, NewBooking, NewClass, StudioClass, WindowCheck};

// ==================== Health ====================

/// Check if the store is usable.
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Classes ====================

/// Add a class to the catalog.
///
/// # Returns
/// * `Ok(StudioClass)` with the assigned ID
/// * `Err(RepositoryError::Conflict)` if a same-named class has a colliding window
pub async fn create_class<R: FullRepository + ?Sized>(
    repo: &R,
    new_class: NewClass,
) -> RepositoryResult<StudioClass> {
    let requested_name = new_class.name.clone();
    match repo.create_class(new_class).await {
        Ok(class) => {
            info!(
                class_id = %class.id,
                class_name = %class.name,
                start_date = %class.start_date,
                end_date = %class.end_date,
                capacity = class.capacity,
                "Created class"
            );
            Ok(class)
        }
        Err(err @ RepositoryError::Conflict { .. }) => {
            warn!(class_name = %requested_name, error = %err, "Rejected conflicting class");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// List all classes in creation order.
pub async fn list_classes<R: FullRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<StudioClass>> {
    repo.list_classes().await
}

// ==================== Bookings ====================

/// Book a member into a class on a date.
///
/// The booking is always recorded. When it is the first booking for its
/// (date, class) pair and no scheduled class covers the date, a warning is
/// logged.
pub async fn book_class<R: FullRepository + ?Sized>(
    repo: &R,
    new_booking: NewBooking,
) -> RepositoryResult<Booking> {
    let receipt = repo.book_class(new_booking).await?;
    let booking = receipt.booking;

    match receipt.window_check {
        WindowCheck::Matched => info!(
            member_name = %booking.member_name,
            class_name = %booking.class_name,
            class_date = %booking.class_date,
            "Booking confirmed"
        ),
        WindowCheck::Unmatched => warn!(
            member_name = %booking.member_name,
            class_name = %booking.class_name,
            class_date = %booking.class_date,
            "Booking recorded for a class that is not scheduled on this date"
        ),
        WindowCheck::Bypassed => info!(
            member_name = %booking.member_name,
            class_name = %booking.class_name,
            class_date = %booking.class_date,
            "Booking added to existing class bookings"
        ),
    }

    Ok(booking)
}

/// Fetch all bookings on `date`, grouped by class name.
pub async fn get_bookings_by_date<R: FullRepository + ?Sized>(
    repo: &R,
    date: NaiveDate,
) -> RepositoryResult<BookingsByClass> {
    let bookings = repo.get_bookings_by_date(date).await?;
    debug!(
        class_date = %date,
        classes = bookings.len(),
        bookings = bookings.values().map(Vec::len).sum::<usize>(),
        "Fetched bookings"
    );
    Ok(bookings)
}

/// Counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub classes: usize,
    pub booking_dates: usize,
}

/// Gather store statistics.
pub async fn store_stats<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<StoreStats> {
    Ok(StoreStats {
        classes: repo.class_count().await?,
        booking_dates: repo.booking_date_count().await?,
    })
}
