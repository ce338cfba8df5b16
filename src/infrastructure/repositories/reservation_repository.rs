//! Reservation Repository Implementation
//!
//! PostgreSQL implementation of the ReservationRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Reservation, ReservationCreate, ReservationRepository, ReservationUpdate};
use crate::shared::error::AppError;

/// Database row representation of the reservation table.
#[derive(Debug, sqlx::FromRow)]
struct ReservationRow {
    id: i64,
    from_reserve: DateTime<Utc>,
    to_reserve: DateTime<Utc>,
    meetingroom_id: i64,
    user_id: Option<i64>,
}

impl ReservationRow {
    fn into_reservation(self) -> Reservation {
        Reservation {
            id: self.id,
            from_reserve: self.from_reserve,
            to_reserve: self.to_reserve,
            meetingroom_id: self.meetingroom_id,
            user_id: self.user_id,
        }
    }
}

/// PostgreSQL reservation repository implementation.
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    async fn create(&self, reservation: &ReservationCreate) -> Result<Reservation, AppError> {
        let room_id = reservation.meetingroom_id();
        let mut tx = self.pool.begin().await?;

        // Lock the room row so it cannot disappear before the insert commits.
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM meetingroom WHERE id = $1 FOR SHARE",
        )
        .bind(room_id)
        .fetch_optional(&mut *tx)
        .await?;

        if exists.is_none() {
            return Err(AppError::RoomNotFound(room_id));
        }

        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            INSERT INTO reservation (from_reserve, to_reserve, meetingroom_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, from_reserve, to_reserve, meetingroom_id, user_id
            "#,
        )
        .bind(reservation.from_reserve())
        .bind(reservation.to_reserve())
        .bind(room_id)
        .bind(reservation.user_id())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::RoomNotFound(room_id)
            }
            _ => AppError::from(e),
        })?;

        tx.commit().await?;

        Ok(row.into_reservation())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, AppError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, from_reserve, to_reserve, meetingroom_id, user_id
            FROM reservation
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_reservation()))
    }

    async fn update(&self, id: i64, update: &ReservationUpdate) -> Result<Reservation, AppError> {
        let row = sqlx::query_as::<_, ReservationRow>(
            r#"
            UPDATE reservation
            SET from_reserve = $2,
                to_reserve = $3
            WHERE id = $1
            RETURNING id, from_reserve, to_reserve, meetingroom_id, user_id
            "#,
        )
        .bind(id)
        .bind(update.from_reserve())
        .bind(update.to_reserve())
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::ReservationNotFound(id))?;

        Ok(row.into_reservation())
    }

    async fn list_by_room(&self, meetingroom_id: i64) -> Result<Vec<Reservation>, AppError> {
        let rows = sqlx::query_as::<_, ReservationRow>(
            r#"
            SELECT id, from_reserve, to_reserve, meetingroom_id, user_id
            FROM reservation
            WHERE meetingroom_id = $1
            ORDER BY from_reserve, id
            "#,
        )
        .bind(meetingroom_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_reservation()).collect())
    }
}
