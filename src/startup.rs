//! Application Startup
//!
//! Wires repositories, clock and services together.

use std::sync::Arc;

use anyhow::Result;
use sqlx::PgPool;

use crate::application::services::{
    ReservationService, ReservationServiceImpl, RoomService, RoomServiceImpl,
};
use crate::config::Settings;
use crate::domain::{MeetingRoomRepository, ReservationRepository};
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    InMemoryRepository, PgMeetingRoomRepository, PgReservationRepository,
};
use crate::shared::clock::{Clock, SystemClock};

/// Services handed to the request layer
#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomService>,
    pub reservations: Arc<dyn ReservationService>,
}

impl AppState {
    /// Build state over any pair of repositories.
    pub fn new<M, R>(room_repo: Arc<M>, reservation_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self
    where
        M: MeetingRoomRepository + 'static,
        R: ReservationRepository + 'static,
    {
        Self {
            rooms: Arc::new(RoomServiceImpl::new(room_repo)),
            reservations: Arc::new(ReservationServiceImpl::new(reservation_repo, clock)),
        }
    }

    /// State backed by a fresh process-local store.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(InMemoryRepository::new());
        Self::new(store.clone(), store, clock)
    }
}

/// Application instance
pub struct Application {
    state: AppState,
    pool: PgPool,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: &Settings) -> Result<Self> {
        let pool = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        database::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");

        let state = AppState::new(
            Arc::new(PgMeetingRoomRepository::new(pool.clone())),
            Arc::new(PgReservationRepository::new(pool.clone())),
            Arc::new(SystemClock),
        );

        Ok(Self { state, pool })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
