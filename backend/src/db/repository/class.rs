//! Class catalog repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{NewClass, StudioClass};

/// Repository trait for the class catalog.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ClassRepository: Send + Sync {
    // ==================== Health ====================

    /// Check if the store is usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Classes ====================

    /// Add a class to the catalog.
    ///
    /// The class name is lower-cased before storage.
    ///
    /// # Returns
    /// * `Ok(StudioClass)` - The stored class with its assigned ID
    /// * `Err(RepositoryError::Conflict)` - If a class with the same name has
    ///   a colliding window; the catalog is left unchanged
    async fn create_class(&self, new_class: NewClass) -> RepositoryResult<StudioClass>;

    /// List all classes in creation order.
    async fn list_classes(&self) -> RepositoryResult<Vec<StudioClass>>;

    /// Number of classes in the catalog.
    async fn class_count(&self) -> RepositoryResult<usize>;
}
