//! HTTP handlers for the REST API.
//!
//! Each handler decodes and validates its request, then delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    Booking, BookClassRequest, BookingsByClass, ClassListResponse, CreateClassRequest,
    HealthResponse, StudioClass,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::parse_date;
use crate::validation;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo = state.repository.as_ref();
    let status = match db_services::health_check(repo).await {
        Ok(true) => "ok",
        Ok(false) | Err(_) => "degraded",
    };
    let stats = db_services::store_stats(repo).await?;

    Ok(Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        classes: stats.classes,
        booking_dates: stats.booking_dates,
    }))
}

// =============================================================================
// Classes
// =============================================================================

/// POST /classes
///
/// Create a class. Responds 201 with the stored class, or 409 if a class with
/// the same name already runs over a colliding window.
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudioClass>), AppError> {
    let Json(request) = payload?;
    let new_class = validation::validate_create_class(&request, validation::today())?;

    let class = db_services::create_class(state.repository.as_ref(), new_class).await?;

    Ok((StatusCode::CREATED, Json(class)))
}

/// GET /classes
pub async fn list_classes(State(state): State<AppState>) -> HandlerResult<ClassListResponse> {
    let classes = db_services::list_classes(state.repository.as_ref()).await?;
    let total = classes.len();

    Ok(Json(ClassListResponse { classes, total }))
}

// =============================================================================
// Bookings
// =============================================================================

/// POST /bookings
///
/// Book a member into a class on a date.
pub async fn book_class(
    State(state): State<AppState>,
    payload: Result<Json<BookClassRequest>, JsonRejection>,
) -> HandlerResult<Booking> {
    let Json(request) = payload?;
    let new_booking = validation::validate_book_class(&request, validation::today())?;

    let booking = db_services::book_class(state.repository.as_ref(), new_booking).await?;

    Ok(Json(booking))
}

/// GET /bookings/{class_date}
///
/// All bookings on a date, grouped by class name.
pub async fn get_bookings_by_date(
    State(state): State<AppState>,
    Path(class_date): Path<String>,
) -> HandlerResult<BookingsByClass> {
    let date = parse_date(&class_date).ok_or_else(|| {
        AppError::bad_request(
            "Invalid date format. Use YYYY-MM-DD",
            format!("could not parse '{}'", class_date),
        )
    })?;

    let bookings = db_services::get_bookings_by_date(state.repository.as_ref(), date).await?;

    Ok(Json(bookings))
}
