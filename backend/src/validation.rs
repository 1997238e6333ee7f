//! Explicit request validation.
//!
//! One function per request shape. Each returns either the validated
//! command for the store or every problem found, as `(field, reason)` pairs.
//! "Today" is a parameter so the date rules are deterministic under test.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::{BookClassRequest, CreateClassRequest};
use crate::models::{parse_date, NewBooking, NewClass};

pub const MISSING_OR_INVALID: &str = "is missing or invalid";
pub const PAST_DATE: &str = "cannot be a past date";
pub const START_AFTER_END: &str = "cannot be greater than end_date";
pub const BOOKING_BEFORE_TODAY: &str = "cannot be before today";

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

pub type ValidationResult<T> = Result<T, Vec<FieldError>>;

/// The current calendar day in UTC.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

fn required_text(
    value: &Option<String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Some(text.clone()),
        _ => {
            errors.push(FieldError::new(field, MISSING_OR_INVALID));
            None
        }
    }
}

fn required_date(
    value: &Option<String>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    match value.as_deref().and_then(parse_date) {
        Some(date) => Some(date),
        None => {
            errors.push(FieldError::new(field, MISSING_OR_INVALID));
            None
        }
    }
}

/// Validate a class creation request.
///
/// Rules: `class_name` present and not blank; both dates present and
/// `YYYY-MM-DD`; `capacity` a positive integer; neither date before `today`;
/// `start_date` not after `end_date`.
pub fn validate_create_class(
    request: &CreateClassRequest,
    today: NaiveDate,
) -> ValidationResult<NewClass> {
    let mut errors = Vec::new();

    let name = required_text(&request.class_name, "class_name", &mut errors);
    let start_date = required_date(&request.start_date, "start_date", &mut errors);
    let end_date = required_date(&request.end_date, "end_date", &mut errors);
    let capacity = match request.capacity.map(u32::try_from) {
        Some(Ok(capacity)) if capacity > 0 => Some(capacity),
        _ => {
            errors.push(FieldError::new("capacity", MISSING_OR_INVALID));
            None
        }
    };

    if let Some(start) = start_date {
        if start < today {
            errors.push(FieldError::new("start_date", PAST_DATE));
        }
    }
    if let Some(end) = end_date {
        if end < today {
            errors.push(FieldError::new("end_date", PAST_DATE));
        }
    }
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if start > end {
            errors.push(FieldError::new("start_date", START_AFTER_END));
        }
    }

    match (name, start_date, end_date, capacity) {
        (Some(name), Some(start), Some(end), Some(capacity)) if errors.is_empty() => {
            Ok(NewClass::new(name, start, end, capacity))
        }
        _ => Err(errors),
    }
}

/// Validate a booking request.
///
/// Rules: `class_name` and `member_name` present and not blank;
/// `class_date` present, `YYYY-MM-DD`, and not before `today`.
pub fn validate_book_class(
    request: &BookClassRequest,
    today: NaiveDate,
) -> ValidationResult<NewBooking> {
    let mut errors = Vec::new();

    let class_name = required_text(&request.class_name, "class_name", &mut errors);
    let member_name = required_text(&request.member_name, "member_name", &mut errors);
    let class_date = required_date(&request.class_date, "class_date", &mut errors);

    if let Some(date) = class_date {
        if date < today {
            errors.push(FieldError::new("class_date", BOOKING_BEFORE_TODAY));
        }
    }

    match (class_name, member_name, class_date) {
        (Some(class_name), Some(member_name), Some(date)) if errors.is_empty() => {
            Ok(NewBooking::new(class_name, member_name, date))
        }
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    const TODAY: &str = "2025-02-01";

    fn class_request(name: &str, start: &str, end: &str, capacity: i64) -> CreateClassRequest {
        CreateClassRequest {
            class_name: Some(name.to_string()),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            capacity: Some(capacity),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_class_request() {
        let request = class_request("Yoga", "2025-02-20", "2025-03-15", 10);
        let new_class = validate_create_class(&request, date(TODAY)).unwrap();
        assert_eq!(new_class.name, "Yoga");
        assert_eq!(new_class.start_date, date("2025-02-20"));
        assert_eq!(new_class.end_date, date("2025-03-15"));
        assert_eq!(new_class.capacity, 10);
    }

    #[test]
    fn test_today_is_the_utc_day() {
        let before = chrono::Utc::now().date_naive();
        let day = today();
        let after = chrono::Utc::now().date_naive();
        assert!(day == before || day == after);
    }

    #[test]
    fn test_class_starting_today_is_valid() {
        let request = class_request("Yoga", TODAY, TODAY, 1);
        assert!(validate_create_class(&request, date(TODAY)).is_ok());
    }

    #[test]
    fn test_missing_class_fields_are_all_reported() {
        let request = CreateClassRequest {
            class_name: Some("   ".to_string()),
            start_date: Some("2025-02-15".to_string()),
            end_date: None,
            capacity: None,
        };
        let errors = validate_create_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(fields(&errors), vec!["class_name", "end_date", "capacity"]);
        assert_eq!(errors[0].to_string(), "class_name is missing or invalid");
    }

    #[test]
    fn test_day_first_date_is_rejected() {
        let request = class_request("Yoga", "15-02-2025", "2025-03-15", 10);
        let errors = validate_create_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("start_date", MISSING_OR_INVALID)]);
    }

    #[test]
    fn test_non_positive_capacity_is_rejected() {
        for capacity in [0, -5, i64::from(u32::MAX) + 1] {
            let request = class_request("Yoga", "2025-02-20", "2025-03-15", capacity);
            let errors = validate_create_class(&request, date(TODAY)).unwrap_err();
            assert_eq!(fields(&errors), vec!["capacity"]);
        }
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let request = class_request("Pilates", "2025-02-25", "2025-02-20", 10);
        let errors = validate_create_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("start_date", START_AFTER_END)]);
    }

    #[test]
    fn test_past_dates_are_rejected() {
        let request = class_request("Yoga", "2025-01-20", "2025-01-25", 10);
        let errors = validate_create_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("start_date", PAST_DATE),
                FieldError::new("end_date", PAST_DATE),
            ]
        );
    }

    #[test]
    fn test_valid_booking_request() {
        let request = BookClassRequest {
            class_name: Some("Yoga".to_string()),
            member_name: Some("Sai Kumar".to_string()),
            class_date: Some("2025-02-15".to_string()),
        };
        let booking = validate_book_class(&request, date(TODAY)).unwrap();
        assert_eq!(booking, NewBooking::new("Yoga", "Sai Kumar", date("2025-02-15")));
    }

    #[test]
    fn test_booking_today_is_valid() {
        let request = BookClassRequest {
            class_name: Some("Yoga".to_string()),
            member_name: Some("Sai".to_string()),
            class_date: Some(TODAY.to_string()),
        };
        assert!(validate_book_class(&request, date(TODAY)).is_ok());
    }

    #[test]
    fn test_missing_member_name() {
        let request = BookClassRequest {
            class_name: Some("Yoga".to_string()),
            member_name: Some(String::new()),
            class_date: Some("2025-02-15".to_string()),
        };
        let errors = validate_book_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("member_name", MISSING_OR_INVALID)]);
    }

    #[test]
    fn test_booking_in_the_past_is_rejected() {
        let request = BookClassRequest {
            class_name: Some("Yoga".to_string()),
            member_name: Some("Sai".to_string()),
            class_date: Some("2025-01-31".to_string()),
        };
        let errors = validate_book_class(&request, date(TODAY)).unwrap_err();
        assert_eq!(
            errors,
            vec![FieldError::new("class_date", BOOKING_BEFORE_TODAY)]
        );
    }

    #[test]
    fn test_empty_booking_request_reports_every_field() {
        let errors = validate_book_class(&BookClassRequest::default(), date(TODAY)).unwrap_err();
        assert_eq!(fields(&errors), vec!["class_name", "member_name", "class_date"]);
    }
}
