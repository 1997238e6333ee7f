//! Scheduling store: repository traits, the in-memory implementation, and
//! the service layer on top of them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - logging, orchestration   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! │  - ClassRepository (catalog)                            │
//! │  - BookingRepository (ledger)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │  LocalRepository (in-memory)                  │
//!     │  ClassCatalog + BookingLedger                 │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is no global store: the server binary creates one
//! [`LocalRepository`] and shares it with the handlers, and tests create a
//! fresh one each.

pub mod repositories;
pub mod repository;
pub mod services;

pub use repositories::{BookingLedger, ClassCatalog, LocalRepository};
pub use repository::{
    BookingRepository, ClassRepository, ErrorContext, FullRepository, RepositoryError,
    RepositoryResult,
};
pub use services::{
    book_class, create_class, get_bookings_by_date, health_check, list_classes, store_stats,
    StoreStats,
};
