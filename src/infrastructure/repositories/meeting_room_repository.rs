//! Meeting Room Repository Implementation
//!
//! PostgreSQL implementation of the MeetingRoomRepository trait.
//! Name uniqueness is enforced by the `meetingroom.name` UNIQUE constraint,
//! so the check and the write are a single atomic statement.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{MeetingRoom, MeetingRoomCreate, MeetingRoomRepository, MeetingRoomUpdate};
use crate::shared::error::AppError;

/// Database row representation of the meetingroom table.
#[derive(Debug, sqlx::FromRow)]
struct MeetingRoomRow {
    id: i64,
    name: String,
    description: Option<String>,
}

impl MeetingRoomRow {
    fn into_room(self) -> MeetingRoom {
        MeetingRoom {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Map a unique violation on `name` to a domain error.
fn duplicate_name_or(e: sqlx::Error, name: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateName(name.to_string())
        }
        _ => AppError::from(e),
    }
}

/// PostgreSQL meeting room repository implementation.
#[derive(Clone)]
pub struct PgMeetingRoomRepository {
    pool: PgPool,
}

impl PgMeetingRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRoomRepository for PgMeetingRoomRepository {
    async fn create(&self, room: &MeetingRoomCreate) -> Result<MeetingRoom, AppError> {
        let row = sqlx::query_as::<_, MeetingRoomRow>(
            r#"
            INSERT INTO meetingroom (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description
            "#,
        )
        .bind(room.name())
        .bind(room.description())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| duplicate_name_or(e, room.name()))?;

        Ok(row.into_room())
    }

    async fn find_id_by_name(&self, name: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM meetingroom WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MeetingRoom>, AppError> {
        let row = sqlx::query_as::<_, MeetingRoomRow>(
            "SELECT id, name, description FROM meetingroom WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_room()))
    }

    async fn list(&self) -> Result<Vec<MeetingRoom>, AppError> {
        let rows = sqlx::query_as::<_, MeetingRoomRow>(
            "SELECT id, name, description FROM meetingroom ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_room()).collect())
    }

    async fn update(&self, id: i64, update: &MeetingRoomUpdate) -> Result<MeetingRoom, AppError> {
        let (clear_or_set, description) = match update.description() {
            Some(description) => (true, description),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, MeetingRoomRow>(
            r#"
            UPDATE meetingroom
            SET name = COALESCE($2, name),
                description = CASE WHEN $3 THEN $4 ELSE description END
            WHERE id = $1
            RETURNING id, name, description
            "#,
        )
        .bind(id)
        .bind(update.name())
        .bind(clear_or_set)
        .bind(description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| duplicate_name_or(e, update.name().unwrap_or_default()))?
        .ok_or(AppError::RoomNotFound(id))?;

        Ok(row.into_room())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::validation::{validate_room_create, validate_room_update};
    use serde_json::json;

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_create_and_list_rooms(pool: PgPool) -> anyhow::Result<()> {
        let repo = PgMeetingRoomRepository::new(pool);

        let sakura = repo.create(&validate_room_create("Sakura", Some("3rd floor"))?).await?;
        let fuji = repo.create(&validate_room_create("Fuji", None)?).await?;

        assert_eq!(repo.find_id_by_name("Sakura").await?, Some(sakura.id));
        assert_eq!(repo.find_id_by_name("sakura").await?, None);
        assert_eq!(repo.list().await?, vec![sakura, fuji]);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_duplicate_name_is_rejected(pool: PgPool) -> anyhow::Result<()> {
        let repo = PgMeetingRoomRepository::new(pool);
        let room = validate_room_create("Sakura", None)?;

        repo.create(&room).await?;
        let err = repo.create(&room).await.unwrap_err();

        assert!(matches!(err, AppError::DuplicateName(_)));
        assert_eq!(repo.list().await?.len(), 1);
        Ok(())
    }

    #[sqlx::test]
    #[ignore = "requires DATABASE_URL"]
    async fn test_rename_rechecks_uniqueness(pool: PgPool) -> anyhow::Result<()> {
        let repo = PgMeetingRoomRepository::new(pool);
        repo.create(&validate_room_create("Sakura", None)?).await?;
        let fuji = repo.create(&validate_room_create("Fuji", Some("lobby"))?).await?;

        let err = repo
            .update(fuji.id, &validate_room_update(&json!({ "name": "Sakura" }))?)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateName(_)));

        let cleared = repo
            .update(fuji.id, &validate_room_update(&json!({ "description": null }))?)
            .await?;
        assert_eq!(cleared.name, "Fuji");
        assert!(cleared.description.is_none());
        Ok(())
    }
}
