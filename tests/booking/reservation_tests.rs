//! Reservation Tests

use chrono::Duration;
use pretty_assertions::assert_eq;
use serde_json::json;

use meeting_room_booking::shared::error::{AppError, ErrorCategory, ValidationError};

use crate::common::{now, reservation_payload, window_payload, TestApp};

#[tokio::test]
async fn test_create_reservation_for_existing_room() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;

    let reservation = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, 10, 60))
        .await
        .unwrap();

    assert_eq!(reservation.id, 1);
    assert_eq!(reservation.meetingroom_id, room);
    assert_eq!(reservation.from_reserve, now() + Duration::minutes(10));
    assert_eq!(reservation.to_reserve, now() + Duration::hours(1));
    assert_eq!(reservation.user_id, None);
}

#[tokio::test]
async fn test_create_reservation_for_unknown_room() {
    let app = TestApp::new();
    app.room("Sakura").await;

    let err = app
        .state
        .reservations
        .create_reservation(&reservation_payload(999, 10, 60))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RoomNotFound(999)));
    assert!(app.state.reservations.list_room_reservations(999).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_start_in_past_is_rejected() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;

    let err = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, -1, 60))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ValidationError::PastStartTime)));
}

#[tokio::test]
async fn test_inverted_range_is_rejected() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;

    let err = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, 60, 60))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ValidationError::InvertedRange)));
}

#[tokio::test]
async fn test_update_with_unknown_field_is_rejected() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;
    let created = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, 10, 60))
        .await
        .unwrap();

    let mut payload = window_payload(20, 80);
    payload["extra"] = json!(1);
    let err = app
        .state
        .reservations
        .update_reservation(created.id, &payload)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ValidationError::UnknownField(ref f)) if f == "extra"));
    assert_eq!(err.category(), ErrorCategory::InputShape);
}

#[tokio::test]
async fn test_update_moves_window_only() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;
    let mut payload = reservation_payload(room, 10, 60);
    payload["user_id"] = json!(7);
    let created = app.state.reservations.create_reservation(&payload).await.unwrap();

    let updated = app
        .state
        .reservations
        .update_reservation(created.id, &window_payload(120, 180))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.meetingroom_id, room);
    assert_eq!(updated.user_id, Some(7));
    assert_eq!(updated.from_reserve, now() + Duration::hours(2));
    assert_eq!(app.state.reservations.get_reservation(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_unknown_reservation() {
    let app = TestApp::new();

    let err = app
        .state
        .reservations
        .update_reservation(5, &window_payload(10, 60))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ReservationNotFound(5)));
}

#[tokio::test]
async fn test_overlapping_reservations_are_accepted() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;

    let first = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, 10, 60))
        .await
        .unwrap();
    let second = app
        .state
        .reservations
        .create_reservation(&reservation_payload(room, 30, 90))
        .await
        .unwrap();

    let schedule = app.state.reservations.list_room_reservations(room).await.unwrap();

    assert_eq!(schedule.iter().map(|r| r.id).collect::<Vec<_>>(), vec![first.id, second.id]);
}

#[tokio::test]
async fn test_room_schedule_hides_user_id() {
    let app = TestApp::new();
    let room = app.room("Sakura").await;
    let mut payload = reservation_payload(room, 10, 60);
    payload["user_id"] = json!(3);
    app.state.reservations.create_reservation(&payload).await.unwrap();

    let schedule = app.state.reservations.list_room_reservations(room).await.unwrap();
    let json = serde_json::to_value(&schedule).unwrap();

    assert!(json[0].get("user_id").is_none());
}
