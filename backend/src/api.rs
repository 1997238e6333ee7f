//! Request and response shapes shared by the HTTP layer and validation.
//!
//! Request fields are optional so that a missing field is reported by
//! validation with its name instead of failing JSON decoding.

use serde::{Deserialize, Serialize};

pub use crate::models::{Booking, BookingsByClass, ClassId, StudioClass};

/// Body of `POST /classes`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClassRequest {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
}

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookClassRequest {
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub member_name: Option<String>,
    #[serde(default)]
    pub class_date: Option<String>,
}

/// Response of `GET /classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassListResponse {
    pub classes: Vec<StudioClass>,
    pub total: usize,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub classes: usize,
    pub booking_dates: usize,
}
