//! Common Test Utilities
//!
//! Shared helpers and fixtures.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};

use meeting_room_booking::shared::clock::FixedClock;
use meeting_room_booking::startup::AppState;

/// Instant every test treats as "now"
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 4, 1, 9, 0, 0).unwrap()
}

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            state: AppState::in_memory(Arc::new(FixedClock::new(now()))),
        }
    }

    /// Create a room and return its id
    pub async fn room(&self, name: &str) -> i64 {
        self.state
            .rooms
            .create_room(name, None)
            .await
            .expect("room should be created")
            .id
    }
}

/// Reservation payload starting and ending the given minutes after `now()`
pub fn reservation_payload(room_id: i64, start_minutes: i64, end_minutes: i64) -> Value {
    json!({
        "from_reserve": (now() + Duration::minutes(start_minutes)).to_rfc3339(),
        "to_reserve": (now() + Duration::minutes(end_minutes)).to_rfc3339(),
        "meetingroom_id": room_id,
    })
}

/// Update payload with the given window
pub fn window_payload(start_minutes: i64, end_minutes: i64) -> Value {
    json!({
        "from_reserve": (now() + Duration::minutes(start_minutes)).to_rfc3339(),
        "to_reserve": (now() + Duration::minutes(end_minutes)).to_rfc3339(),
    })
}
