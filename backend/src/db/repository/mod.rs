//! Repository trait definitions for the scheduling store.
//!
//! The store is split into two focused traits:
//!
//! - [`ClassRepository`]: the class catalog (creation, conflict detection, lookups)
//! - [`BookingRepository`]: the booking ledger (recording and date-scoped queries)
//!
//! # Convenience Trait Bound
//!
//! For code that needs both, use the [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<()> {
//!     let class = repo.create_class(new_class).await?;
//!     repo.book_class(NewBooking::new(&class.name, "Sai", class.start_date)).await?;
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod class;
pub mod error;

// Re-export error types
pub use error::{ErrorContext, RepositoryError, RepositoryResult};

// Re-export all traits
pub use booking::BookingRepository;
pub use class::ClassRepository;

/// Composite trait bound for a complete store implementation.
///
/// Automatically implemented for any type that implements both
/// [`ClassRepository`] and [`BookingRepository`].
pub trait FullRepository: ClassRepository + BookingRepository {}

// Blanket implementation: any type implementing both traits automatically implements FullRepository
impl<T> FullRepository for T where T: ClassRepository + BookingRepository {}
