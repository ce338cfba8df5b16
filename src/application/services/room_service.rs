//! Meeting Room Service
//!
//! Validates room input and hands it to the meeting room repository.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dto::MeetingRoomDb;
use crate::application::validation::{validate_room_create, validate_room_update};
use crate::domain::MeetingRoomRepository;
use crate::shared::error::AppError;

/// Room service trait
#[async_trait]
pub trait RoomService: Send + Sync {
    /// Create a new room
    async fn create_room(&self, name: &str, description: Option<&str>) -> Result<MeetingRoomDb, AppError>;

    /// Look up a room id by exact name
    async fn find_room_id_by_name(&self, name: &str) -> Result<Option<i64>, AppError>;

    /// Get room by ID
    async fn get_room(&self, room_id: i64) -> Result<MeetingRoomDb, AppError>;

    /// List all rooms in insertion order
    async fn list_rooms(&self) -> Result<Vec<MeetingRoomDb>, AppError>;

    /// Partially update a room
    async fn update_room(&self, room_id: i64, payload: &Value) -> Result<MeetingRoomDb, AppError>;
}

/// RoomService implementation
pub struct RoomServiceImpl<M>
where
    M: MeetingRoomRepository,
{
    room_repo: Arc<M>,
}

impl<M> RoomServiceImpl<M>
where
    M: MeetingRoomRepository,
{
    pub fn new(room_repo: Arc<M>) -> Self {
        Self { room_repo }
    }
}

#[async_trait]
impl<M> RoomService for RoomServiceImpl<M>
where
    M: MeetingRoomRepository + 'static,
{
    async fn create_room(&self, name: &str, description: Option<&str>) -> Result<MeetingRoomDb, AppError> {
        let room = validate_room_create(name, description)?;

        // Fast path; the repository still enforces uniqueness atomically.
        if let Some(existing) = self.room_repo.find_id_by_name(room.name()).await? {
            tracing::warn!(room_id = existing, name = %room.name(), "Duplicate meeting room name");
            return Err(AppError::DuplicateName(room.name().to_string()));
        }

        let created = self.room_repo.create(&room).await?;
        tracing::info!(room_id = created.id, name = %created.name, "Meeting room created");

        Ok(MeetingRoomDb::from(created))
    }

    async fn find_room_id_by_name(&self, name: &str) -> Result<Option<i64>, AppError> {
        self.room_repo.find_id_by_name(name).await
    }

    async fn get_room(&self, room_id: i64) -> Result<MeetingRoomDb, AppError> {
        self.room_repo
            .find_by_id(room_id)
            .await?
            .map(MeetingRoomDb::from)
            .ok_or(AppError::RoomNotFound(room_id))
    }

    async fn list_rooms(&self) -> Result<Vec<MeetingRoomDb>, AppError> {
        let rooms = self.room_repo.list().await?;
        tracing::debug!(count = rooms.len(), "Listed meeting rooms");

        Ok(rooms.into_iter().map(MeetingRoomDb::from).collect())
    }

    async fn update_room(&self, room_id: i64, payload: &Value) -> Result<MeetingRoomDb, AppError> {
        let update = validate_room_update(payload)?;

        let updated = self.room_repo.update(room_id, &update).await?;
        tracing::info!(room_id = updated.id, name = %updated.name, "Meeting room updated");

        Ok(MeetingRoomDb::from(updated))
    }
}
