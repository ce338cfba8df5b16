//! Response DTOs
//!
//! Read projections handed to the response layer. Timestamps serialize as
//! ISO-8601 UTC.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{MeetingRoom, Reservation};

/// Meeting room as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRoomDb {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<MeetingRoom> for MeetingRoomDb {
    fn from(room: MeetingRoom) -> Self {
        Self {
            id: room.id,
            name: room.name,
            description: room.description,
        }
    }
}

/// Full reservation, including its creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationDb {
    pub id: i64,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
    pub meetingroom_id: i64,
    pub user_id: Option<i64>,
}

impl From<Reservation> for ReservationDb {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            from_reserve: reservation.from_reserve,
            to_reserve: reservation.to_reserve,
            meetingroom_id: reservation.meetingroom_id,
            user_id: reservation.user_id,
        }
    }
}

/// Reservation without its creator, used for per-room schedules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub from_reserve: DateTime<Utc>,
    pub to_reserve: DateTime<Utc>,
    pub meetingroom_id: i64,
}

impl From<Reservation> for ReservationSummary {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            from_reserve: reservation.from_reserve,
            to_reserve: reservation.to_reserve,
            meetingroom_id: reservation.meetingroom_id,
        }
    }
}
