//! In-memory repository
//!
//! Implements both repository traits over a single mutex-guarded store. The
//! mutex is the serialization point: every existence or uniqueness check runs
//! under the same lock as the write that depends on it.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::{
    MeetingRoom, MeetingRoomCreate, MeetingRoomRepository, MeetingRoomUpdate, Reservation,
    ReservationCreate, ReservationRepository, ReservationUpdate,
};
use crate::shared::error::AppError;

#[derive(Debug, Default)]
struct Store {
    rooms: Vec<MeetingRoom>,
    reservations: Vec<Reservation>,
    last_room_id: i64,
    last_reservation_id: i64,
}

impl Store {
    fn room_mut(&mut self, id: i64) -> Option<&mut MeetingRoom> {
        self.rooms.iter_mut().find(|room| room.id == id)
    }

    fn name_taken(&self, name: &str, except: Option<i64>) -> bool {
        self.rooms
            .iter()
            .any(|room| room.name == name && Some(room.id) != except)
    }
}

/// Shared in-memory store for rooms and reservations.
///
/// Clones share the same underlying data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeetingRoomRepository for InMemoryRepository {
    async fn create(&self, room: &MeetingRoomCreate) -> Result<MeetingRoom, AppError> {
        let mut store = self.store.lock();

        if store.name_taken(room.name(), None) {
            return Err(AppError::DuplicateName(room.name().to_string()));
        }

        store.last_room_id += 1;
        let created = MeetingRoom {
            id: store.last_room_id,
            name: room.name().to_string(),
            description: room.description().map(str::to_string),
        };
        store.rooms.push(created.clone());

        Ok(created)
    }

    async fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, AppError> {
        let store = self.store.lock();
        Ok(store.rooms.iter().find(|room| room.name == name).map(|room| room.id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MeetingRoom>, AppError> {
        let store = self.store.lock();
        Ok(store.rooms.iter().find(|room| room.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<MeetingRoom>, AppError> {
        Ok(self.store.lock().rooms.clone())
    }

    async fn update(&self, id: i64, update: &MeetingRoomUpdate) -> Result<MeetingRoom, AppError> {
        let mut store = self.store.lock();

        if store.room_mut(id).is_none() {
            return Err(AppError::RoomNotFound(id));
        }
        if let Some(name) = update.name() {
            if store.name_taken(name, Some(id)) {
                return Err(AppError::DuplicateName(name.to_string()));
            }
        }

        let room = store.room_mut(id).ok_or(AppError::RoomNotFound(id))?;
        room.apply(update);

        Ok(room.clone())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryRepository {
    async fn create(&self, reservation: &ReservationCreate) -> Result<Reservation, AppError> {
        let mut store = self.store.lock();
        let room_id = reservation.meetingroom_id();

        if !store.rooms.iter().any(|room| room.id == room_id) {
            return Err(AppError::RoomNotFound(room_id));
        }

        store.last_reservation_id += 1;
        let created = Reservation {
            id: store.last_reservation_id,
            from_reserve: reservation.from_reserve(),
            to_reserve: reservation.to_reserve(),
            meetingroom_id: room_id,
            user_id: reservation.user_id(),
        };
        store.reservations.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let store = self.store.lock();
        Ok(store.reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn update(&self, id: i64, update: &ReservationUpdate) -> Result<Reservation, AppError> {
        let mut store = self.store.lock();

        let reservation = store
            .reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(AppError::ReservationNotFound(id))?;
        reservation.from_reserve = update.from_reserve();
        reservation.to_reserve = update.to_reserve();

        Ok(reservation.clone())
    }

    async fn list_by_room(&self, meetingroom_id: i64) -> Result<Vec<Reservation>, AppError> {
        let store = self.store.lock();

        let mut reservations: Vec<Reservation> = store
            .reservations
            .iter()
            .filter(|r| r.meetingroom_id == meetingroom_id)
            .cloned()
            .collect();
        reservations.sort_by_key(|r| (r.from_reserve, r.id));

        Ok(reservations)
    }
}
