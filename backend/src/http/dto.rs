//! Data Transfer Objects for the HTTP API.
//!
//! The request and response shapes live in [`crate::api`] so validation can
//! use them without the `http-server` feature; they are re-exported here for
//! handler code.

pub use crate::api::{
    Booking, BookClassRequest, BookingsByClass, ClassListResponse, CreateClassRequest,
    HealthResponse, StudioClass,
};
pub use crate::validation::FieldError;
