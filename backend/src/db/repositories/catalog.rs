//! In-memory class catalog.
//!
//! Holds every class ever created, in creation order, and owns the two rules
//! that protect it: same-named classes may not have colliding windows, and
//! IDs are handed out sequentially starting at 1.

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{normalize_class_name, ClassId, NewClass, StudioClass};

/// Message returned when a new class collides with an existing one.
pub const CLASS_CONFLICT_MESSAGE: &str = "class date conflicts with existing class schedule";

/// Ordered collection of classes guarded by a reader/writer lock.
///
/// Class creation holds the write lock across the conflict scan, the ID
/// assignment and the append, so two concurrent creators can never both pass
/// the scan for overlapping windows.
pub struct ClassCatalog {
    data: RwLock<CatalogData>,
}

struct CatalogData {
    classes: Vec<StudioClass>,
    next_id: ClassId,
}

impl Default for CatalogData {
    fn default() -> Self {
        Self {
            classes: Vec::new(),
            next_id: ClassId::new(1),
        }
    }
}

impl ClassCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(CatalogData::default()),
        }
    }

    /// Add a class, rejecting it if a same-named class has a colliding window.
    pub fn create_class(&self, new_class: NewClass) -> RepositoryResult<StudioClass> {
        let name = normalize_class_name(&new_class.name);
        let mut data = self.data.write();

        if let Some(existing) = data.classes.iter().find(|class| {
            class.name == name && class.conflicts_with(new_class.start_date, new_class.end_date)
        }) {
            return Err(RepositoryError::conflict_with_context(
                CLASS_CONFLICT_MESSAGE,
                ErrorContext::new("create_class")
                    .with_entity("class")
                    .with_entity_id(existing.id)
                    .with_details(format!(
                        "{} already runs {} to {}",
                        existing.name, existing.start_date, existing.end_date
                    )),
            ));
        }

        let id = data.next_id;
        data.next_id = id.next();

        let class = StudioClass {
            id,
            name,
            start_date: new_class.start_date,
            end_date: new_class.end_date,
            capacity: new_class.capacity,
        };
        data.classes.push(class.clone());
        Ok(class)
    }

    /// First class named `name` whose window contains `date`.
    pub fn find_active(&self, name: &str, date: NaiveDate) -> Option<StudioClass> {
        let name = normalize_class_name(name);
        self.data
            .read()
            .classes
            .iter()
            .find(|class| class.name == name && class.is_active_on(date))
            .cloned()
    }

    /// All classes in creation order.
    pub fn list(&self) -> Vec<StudioClass> {
        self.data.read().classes.clone()
    }

    pub fn len(&self) -> usize {
        self.data.read().classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::new()
    }
}
