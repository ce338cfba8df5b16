//! Meeting room entity, its validated input shapes, and repository trait.
//!
//! Maps to the `meetingroom` table:
//! - id: BIGSERIAL PRIMARY KEY
//! - name: VARCHAR(100) NOT NULL UNIQUE
//! - description: TEXT NULL

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A bookable meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRoom {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,

    /// Room name (1-100 characters, unique, case-sensitive)
    pub name: String,

    /// Free-form description
    pub description: Option<String>,
}

impl MeetingRoom {
    /// Apply a partial update in place. Absent fields are left untouched.
    pub fn apply(&mut self, update: &MeetingRoomUpdate) {
        if let Some(name) = update.name() {
            self.name = name.to_string();
        }
        if let Some(description) = update.description() {
            self.description = description.map(str::to_string);
        }
    }
}

/// Validated input for creating a room.
///
/// Only the validation layer builds this, so every instance has a legal name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingRoomCreate {
    name: String,
    description: Option<String>,
}

impl MeetingRoomCreate {
    pub(crate) fn new(name: String, description: Option<String>) -> Self {
        Self { name, description }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Validated partial update of a room.
///
/// `description` distinguishes "leave as is" (`None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingRoomUpdate {
    name: Option<String>,
    description: Option<Option<String>>,
}

impl MeetingRoomUpdate {
    pub(crate) fn new(name: Option<String>, description: Option<Option<String>>) -> Self {
        Self { name, description }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(|d| d.as_deref())
    }

    /// True when the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Repository trait for meeting room data access.
///
/// Implementations own identity assignment and name uniqueness; the
/// uniqueness check and the write must happen atomically.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MeetingRoomRepository: Send + Sync {
    /// Persist a new room and return it with its assigned id.
    /// Fails with `DuplicateName` if the name is taken.
    async fn create(&self, room: &MeetingRoomCreate) -> Result<MeetingRoom, AppError>;

    /// Exact-match lookup of a room id by name.
    async fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, AppError>;

    /// Find a room by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<MeetingRoom>, AppError>;

    /// All rooms in insertion order.
    async fn list(&self) -> Result<Vec<MeetingRoom>, AppError>;

    /// Apply a partial update, re-checking name uniqueness on rename.
    async fn update(&self, id: i64, update: &MeetingRoomUpdate) -> Result<MeetingRoom, AppError>;
}
