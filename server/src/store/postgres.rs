use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{EventStore, StoreResult};
use crate::models::{Event, EventInput, EventWithSpeakers, Speaker};

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn list_active_events(&self) -> StoreResult<Vec<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, start_date, end_date, is_deleted
            FROM events
            WHERE is_deleted = FALSE
            ORDER BY start_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, start_date, end_date, is_deleted
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_event_with_speakers(&self, id: Uuid) -> StoreResult<Option<EventWithSpeakers>> {
        let mut conn = self.pool.acquire().await?;

        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, description, start_date, end_date, is_deleted
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(event) = event else {
            return Ok(None);
        };

        let speakers = sqlx::query_as::<_, Speaker>(
            r#"
            SELECT id, name, talk_title, talk_description, linked_in_profile, event_id
            FROM speakers
            WHERE event_id = $1
            ORDER BY seq
            "#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?;

        Ok(Some(EventWithSpeakers { event, speakers }))
    }

    async fn insert_event(&self, event: &Event) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, start_date, end_date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(event.is_deleted)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_event_fields(&self, id: Uuid, input: &EventInput) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET title = $2, description = $3, start_date = $4, end_date = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete_event(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE events SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn event_exists(&self, id: Uuid) -> StoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM events WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn insert_speaker(&self, speaker: &Speaker) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO speakers (id, event_id, name, talk_title, talk_description, linked_in_profile)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(speaker.id)
        .bind(speaker.event_id)
        .bind(&speaker.name)
        .bind(&speaker.talk_title)
        .bind(&speaker.talk_description)
        .bind(&speaker.linked_in_profile)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
