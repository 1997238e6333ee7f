//! Studio class model and the window rules used by the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_id_type!(
    /// Sequential identifier of a class; the first class created gets 1.
    i64,
    ClassId
);

/// A class offered by the studio over an inclusive date window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioClass {
    pub id: ClassId,
    /// Lower-cased class name, the key for conflict checks and bookings.
    #[serde(rename = "class_name")]
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Stored for reference; bookings are not limited by it.
    pub capacity: u32,
}

impl StudioClass {
    /// Whether `date` falls inside `[start_date, end_date]`, both ends inclusive.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Whether a window `[start, end]` collides with this class's window.
    ///
    /// Two windows collide when they overlap as open intervals, or when they
    /// share a start date or an end date. Windows that only touch at a single
    /// boundary day (one ends the day the other starts) do not collide.
    pub fn conflicts_with(&self, start: NaiveDate, end: NaiveDate) -> bool {
        (start < self.end_date && end > self.start_date)
            || start == self.start_date
            || end == self.end_date
    }
}

/// A validated request to add a class to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClass {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: u32,
}

impl NewClass {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        capacity: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start_date,
            end_date,
            capacity,
        }
    }
}
