//! Meeting Room Tests

use pretty_assertions::assert_eq;
use serde_json::json;

use meeting_room_booking::application::dto::MeetingRoomDb;
use meeting_room_booking::shared::error::{AppError, ErrorCategory, ErrorResponse};

use crate::common::TestApp;

#[tokio::test]
async fn test_create_room_returns_full_entity() {
    let app = TestApp::new();

    let room = app
        .state
        .rooms
        .create_room("Sakura", Some("3rd floor"))
        .await
        .unwrap();

    assert_eq!(
        room,
        MeetingRoomDb {
            id: 1,
            name: "Sakura".into(),
            description: Some("3rd floor".into()),
        }
    );
}

#[tokio::test]
async fn test_second_room_with_same_name_is_rejected() {
    let app = TestApp::new();
    app.room("Sakura").await;

    let err = app.state.rooms.create_room("Sakura", Some("other")).await.unwrap_err();

    assert!(matches!(err, AppError::DuplicateName(ref name) if name == "Sakura"));
    assert_eq!(err.category(), ErrorCategory::DomainRule);

    let rooms = app.state.rooms.list_rooms().await.unwrap();
    assert_eq!(rooms.iter().filter(|r| r.name == "Sakura").count(), 1);
}

#[tokio::test]
async fn test_names_differing_in_case_are_distinct() {
    let app = TestApp::new();

    app.room("Sakura").await;
    app.room("sakura").await;

    assert_eq!(app.state.rooms.list_rooms().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_find_room_id_by_name() {
    let app = TestApp::new();
    app.room("Sakura").await;
    let fuji = app.room("Fuji").await;

    assert_eq!(app.state.rooms.find_room_id_by_name("Fuji").await.unwrap(), Some(fuji));
    assert_eq!(app.state.rooms.find_room_id_by_name("Everest").await.unwrap(), None);
}

#[tokio::test]
async fn test_list_rooms_is_stable_without_writes() {
    let app = TestApp::new();
    for name in ["Sakura", "Fuji", "Momiji"] {
        app.room(name).await;
    }

    let first = app.state.rooms.list_rooms().await.unwrap();
    let second = app.state.rooms.list_rooms().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
        vec!["Sakura", "Fuji", "Momiji"]
    );
}

#[tokio::test]
async fn test_invalid_name_renders_verbatim_message() {
    let app = TestApp::new();

    let err = app.state.rooms.create_room(&"x".repeat(101), None).await.unwrap_err();
    let body = ErrorResponse::from(&err);

    assert_eq!(body.code, "invalid_length");
    assert_eq!(body.message, "Room name must be 1-100 characters, got 101");
    assert!(!body.retryable);
}

#[tokio::test]
async fn test_partial_update_keeps_absent_fields() {
    let app = TestApp::new();
    let id = app
        .state
        .rooms
        .create_room("Sakura", Some("3rd floor"))
        .await
        .unwrap()
        .id;

    let renamed = app
        .state
        .rooms
        .update_room(id, &json!({ "name": "Sakura West" }))
        .await
        .unwrap();

    assert_eq!(renamed.name, "Sakura West");
    assert_eq!(renamed.description.as_deref(), Some("3rd floor"));
    assert_eq!(app.state.rooms.get_room(id).await.unwrap(), renamed);
}

#[tokio::test]
async fn test_rename_onto_existing_name_is_rejected() {
    let app = TestApp::new();
    app.room("Sakura").await;
    let fuji = app.room("Fuji").await;

    let err = app
        .state
        .rooms
        .update_room(fuji, &json!({ "name": "Sakura" }))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateName(_)));
}

#[tokio::test]
async fn test_get_unknown_room() {
    let app = TestApp::new();

    let err = app.state.rooms.get_room(42).await.unwrap_err();

    assert!(matches!(err, AppError::RoomNotFound(42)));
}
