//! In-memory local repository implementation.
//!
//! Composes the [`ClassCatalog`] and the [`BookingLedger`] behind the
//! repository traits. All state lives for the lifetime of the process; the
//! composition root creates one instance and shares it through `Arc`.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use super::catalog::ClassCatalog;
use super::ledger::BookingLedger;
use crate::db::repository::*;
use crate::models::{BookingReceipt, BookingsByClass, NewBooking, NewClass, StudioClass};

/// In-memory local repository.
///
/// Cloning is cheap and every clone shares the same underlying state.
///
/// # Example
/// ```
/// use studio_scheduler::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.catalog().len(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    catalog: Arc<ClassCatalog>,
    ledger: Arc<BookingLedger>,
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        let catalog = Arc::new(ClassCatalog::new());
        let ledger = Arc::new(BookingLedger::new(Arc::clone(&catalog)));
        Self { catalog, ledger }
    }

    /// The class catalog backing this repository.
    pub fn catalog(&self) -> &ClassCatalog {
        &self.catalog
    }

    /// The booking ledger backing this repository.
    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn create_class(&self, new_class: NewClass) -> RepositoryResult<StudioClass> {
        self.catalog.create_class(new_class)
    }

    async fn list_classes(&self) -> RepositoryResult<Vec<StudioClass>> {
        Ok(self.catalog.list())
    }

    async fn class_count(&self) -> RepositoryResult<usize> {
        Ok(self.catalog.len())
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn book_class(&self, new_booking: NewBooking) -> RepositoryResult<BookingReceipt> {
        Ok(self.ledger.book_class(new_booking))
    }

    async fn get_bookings_by_date(&self, date: NaiveDate) -> RepositoryResult<BookingsByClass> {
        self.ledger.bookings_on(date)
    }

    async fn booking_date_count(&self) -> RepositoryResult<usize> {
        Ok(self.ledger.date_count())
    }
}
