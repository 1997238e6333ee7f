//! Scheduling store behaviour through the service layer.
//!
//! These tests drive a fresh `LocalRepository` per test with fixed calendar
//! dates; request validation (past dates etc.) is not involved here.

use studio_scheduler::db::repositories::LocalRepository;
use studio_scheduler::db::repository::{ClassRepository, RepositoryError};
use studio_scheduler::db::services;
use studio_scheduler::models::{ClassId, NewBooking, NewClass};

mod support;
use support::date;

fn yoga(start: &str, end: &str) -> NewClass {
    NewClass::new("yoga", date(start), date(end), 10)
}

#[tokio::test]
async fn test_studio_scenario() {
    let repo = LocalRepository::new();

    let class = services::create_class(&repo, yoga("2025-02-01", "2025-02-28"))
        .await
        .unwrap();
    assert_eq!(class.id, ClassId::new(1));

    let err = services::create_class(&repo, yoga("2025-02-15", "2025-03-05"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));

    let booking = services::book_class(
        &repo,
        NewBooking::new("yoga", "Sai", date("2025-02-10")),
    )
    .await
    .unwrap();
    assert_eq!(booking.class_name, "yoga");

    let bookings = services::get_bookings_by_date(&repo, date("2025-02-10"))
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&bookings).unwrap(),
        serde_json::json!({
            "yoga": [
                {"member_name": "Sai", "class_date": "2025-02-10", "class_name": "yoga"}
            ]
        })
    );

    let err = services::get_bookings_by_date(&repo, date("2025-02-11"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_conflict_leaves_catalog_unchanged() {
    let repo = LocalRepository::new();
    services::create_class(&repo, yoga("2025-02-01", "2025-02-28"))
        .await
        .unwrap();
    let before = services::list_classes(&repo).await.unwrap();

    for (start, end) in [
        ("2025-02-15", "2025-03-05"), // overlaps the tail
        ("2025-01-15", "2025-02-05"), // overlaps the head
        ("2025-02-01", "2025-02-02"), // same start
        ("2025-02-27", "2025-02-28"), // same end
        ("2025-01-01", "2025-12-31"), // contains it
    ] {
        let result = services::create_class(&repo, yoga(start, end)).await;
        assert!(
            matches!(result, Err(RepositoryError::Conflict { .. })),
            "expected conflict for {} .. {}",
            start,
            end
        );
    }

    assert_eq!(services::list_classes(&repo).await.unwrap(), before);
}

#[tokio::test]
async fn test_ids_are_sequential_without_gaps() {
    let repo = LocalRepository::new();
    let windows = [
        ("2025-01-01", "2025-01-31"),
        ("2025-02-01", "2025-02-28"),
        ("2025-02-10", "2025-02-20"), // rejected
        ("2025-03-01", "2025-03-31"),
    ];

    let mut ids = Vec::new();
    for (start, end) in windows {
        if let Ok(class) = services::create_class(&repo, yoga(start, end)).await {
            ids.push(class.id.value());
        }
    }

    assert_eq!(ids, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_booking_attaches_to_matching_window() {
    let repo = LocalRepository::new();
    services::create_class(
        &repo,
        NewClass::new("Yoga", date("2025-02-01"), date("2025-02-28"), 10),
    )
    .await
    .unwrap();

    services::book_class(&repo, NewBooking::new("Yoga", "Sai", date("2025-02-15")))
        .await
        .unwrap();

    let bookings = services::get_bookings_by_date(&repo, date("2025-02-15"))
        .await
        .unwrap();
    assert_eq!(bookings["yoga"].len(), 1);
    assert_eq!(bookings["yoga"][0].member_name, "Sai");
}

#[tokio::test]
async fn test_unknown_class_booking_is_retrievable() {
    let repo = LocalRepository::new();

    let booking = services::book_class(&repo, NewBooking::new("Zumba", "Ana", date("2025-03-01")))
        .await
        .unwrap();
    assert_eq!(booking.class_name, "zumba");

    let bookings = services::get_bookings_by_date(&repo, date("2025-03-01"))
        .await
        .unwrap();
    assert_eq!(bookings["zumba"][0].member_name, "Ana");
    // The catalog is untouched by bookings.
    assert_eq!(repo.class_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_bookings_do_not_leak_across_dates() {
    let repo = LocalRepository::new();
    let days = ["2025-04-01", "2025-04-02", "2025-04-03"];

    for (i, day) in days.iter().enumerate() {
        for n in 0..=i {
            services::book_class(
                &repo,
                NewBooking::new("spin", format!("member-{}", n), date(day)),
            )
            .await
            .unwrap();
        }
    }

    for (i, day) in days.iter().enumerate() {
        let bookings = services::get_bookings_by_date(&repo, date(day)).await.unwrap();
        assert_eq!(bookings["spin"].len(), i + 1);
        assert!(bookings["spin"].iter().all(|b| b.class_date == date(day)));
    }
}

#[tokio::test]
async fn test_concurrent_bookings_through_shared_store() {
    let repo = LocalRepository::new();
    services::create_class(&repo, yoga("2025-05-01", "2025-05-31"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..32 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            services::book_class(
                &repo,
                NewBooking::new("yoga", format!("member-{}", i), date("2025-05-15")),
            )
            .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let bookings = services::get_bookings_by_date(&repo, date("2025-05-15"))
        .await
        .unwrap();
    assert_eq!(bookings["yoga"].len(), 32);

    let stats = services::store_stats(&repo).await.unwrap();
    assert_eq!(stats.classes, 1);
    assert_eq!(stats.booking_dates, 1);
}
