//! Reservation Service
//!
//! Validates reservation payloads against the injected clock and hands them to
//! the reservation repository. Overlapping reservations on the same room are
//! accepted.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::application::dto::{ReservationDb, ReservationSummary};
use crate::application::validation::{validate_reservation_create, validate_reservation_update};
use crate::domain::ReservationRepository;
use crate::shared::clock::Clock;
use crate::shared::error::AppError;

/// Reservation service trait
#[async_trait]
pub trait ReservationService: Send + Sync {
    /// Create a reservation from an untrusted payload
    async fn create_reservation(&self, payload: &Value) -> Result<ReservationDb, AppError>;

    /// Move an existing reservation to a new time window
    async fn update_reservation(&self, reservation_id: i64, payload: &Value) -> Result<ReservationDb, AppError>;

    /// Get reservation by ID
    async fn get_reservation(&self, reservation_id: i64) -> Result<ReservationDb, AppError>;

    /// Schedule of one room, ordered by start time
    async fn list_room_reservations(&self, room_id: i64) -> Result<Vec<ReservationSummary>, AppError>;
}

/// ReservationService implementation
pub struct ReservationServiceImpl<R>
where
    R: ReservationRepository,
{
    reservation_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ReservationServiceImpl<R>
where
    R: ReservationRepository,
{
    pub fn new(reservation_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            reservation_repo,
            clock,
        }
    }
}

#[async_trait]
impl<R> ReservationService for ReservationServiceImpl<R>
where
    R: ReservationRepository + 'static,
{
    async fn create_reservation(&self, payload: &Value) -> Result<ReservationDb, AppError> {
        let reservation = validate_reservation_create(payload, self.clock.now()).map_err(|e| {
            tracing::warn!(error = %e, "Rejected reservation");
            e
        })?;

        let created = self.reservation_repo.create(&reservation).await?;
        tracing::info!(
            reservation_id = created.id,
            room_id = created.meetingroom_id,
            minutes = created.duration().num_minutes(),
            "Reservation created"
        );

        Ok(ReservationDb::from(created))
    }

    async fn update_reservation(&self, reservation_id: i64, payload: &Value) -> Result<ReservationDb, AppError> {
        let update = validate_reservation_update(payload, self.clock.now()).map_err(|e| {
            tracing::warn!(reservation_id, error = %e, "Rejected reservation update");
            e
        })?;

        let updated = self.reservation_repo.update(reservation_id, &update).await?;
        tracing::info!(reservation_id = updated.id, "Reservation updated");

        Ok(ReservationDb::from(updated))
    }

    async fn get_reservation(&self, reservation_id: i64) -> Result<ReservationDb, AppError> {
        self.reservation_repo
            .find_by_id(reservation_id)
            .await?
            .map(ReservationDb::from)
            .ok_or(AppError::ReservationNotFound(reservation_id))
    }

    async fn list_room_reservations(&self, room_id: i64) -> Result<Vec<ReservationSummary>, AppError> {
        let reservations = self.reservation_repo.list_by_room(room_id).await?;
        tracing::debug!(room_id, count = reservations.len(), "Listed room reservations");

        Ok(reservations.into_iter().map(ReservationSummary::from).collect())
    }
}
