//! Reservation entity, its validated input shapes, and repository trait.
//!
//! Maps to the `reservation` table:
//! - id: BIGSERIAL PRIMARY KEY
//! - from_reserve: TIMESTAMPTZ NOT NULL
//! - to_reserve: TIMESTAMPTZ NOT NULL
//! - meetingroom_id: BIGINT NOT NULL REFERENCES meetingroom(id)
//! - user_id: BIGINT NULL

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A booking of one meeting room over `[from_reserve, to_reserve)`.
///
/// Invariants are checked when the reservation is submitted and are not
/// re-checked once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,

    /// Start of the window (inclusive)
    pub from_reserve: DateTime<Utc>,

    /// End of the window (exclusive)
    pub to_reserve: DateTime<Utc>,

    /// Weak reference to the booked room
    pub meetingroom_id: i64,

    /// Creator, when known
    pub user_id: Option<i64>,
}

impl Reservation {
    /// Length of the reservation window.
    pub fn duration(&self) -> Duration {
        self.to_reserve - self.from_reserve
    }
}

/// Validated input for creating a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationCreate {
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
    meetingroom_id: i64,
    user_id: Option<i64>,
}

impl ReservationCreate {
    pub(crate) fn new(
        from_reserve: DateTime<Utc>,
        to_reserve: DateTime<Utc>,
        meetingroom_id: i64,
        user_id: Option<i64>,
    ) -> Self {
        Self {
            from_reserve,
            to_reserve,
            meetingroom_id,
            user_id,
        }
    }

    pub fn from_reserve(&self) -> DateTime<Utc> {
        self.from_reserve
    }

    pub fn to_reserve(&self) -> DateTime<Utc> {
        self.to_reserve
    }

    pub fn meetingroom_id(&self) -> i64 {
        self.meetingroom_id
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user_id
    }
}

/// Validated reservation update. Only the time window can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationUpdate {
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
}

impl ReservationUpdate {
    pub(crate) fn new(from_reserve: DateTime<Utc>, to_reserve: DateTime<Utc>) -> Self {
        Self {
            from_reserve,
            to_reserve,
        }
    }

    pub fn from_reserve(&self) -> DateTime<Utc> {
        self.from_reserve
    }

    pub fn to_reserve(&self) -> DateTime<Utc> {
        self.to_reserve
    }
}

/// Repository trait for reservation data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persist a reservation after verifying, in the same transaction,
    /// that the referenced room exists. Fails with `RoomNotFound` otherwise.
    async fn create(&self, reservation: &ReservationCreate) -> Result<Reservation, AppError>;

    /// Find a reservation by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError>;

    /// Replace the time window of an existing reservation.
    async fn update(&self, id: i64, update: &ReservationUpdate) -> Result<Reservation, AppError>;

    /// Reservations of one room ordered by start time, then id.
    async fn list_by_room(&self, meetingroom_id: i64) -> Result<Vec<Reservation>, AppError>;
}
