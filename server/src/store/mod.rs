//! Persistence for events and their speakers.
//!
//! Handlers only see [`EventStore`]; the concrete backend is picked at
//! startup from [`crate::config::StorageBackend`].

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Event, EventInput, EventWithSpeakers, Speaker};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEventStore;
pub use postgres::PgEventStore;

pub type StoreResult<T> = Result<T, sqlx::Error>;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events with `is_deleted = false`, ordered by start date then id.
    async fn list_active_events(&self) -> StoreResult<Vec<Event>>;

    /// Looks an event up by id whether or not it has been soft deleted.
    async fn find_event(&self, id: Uuid) -> StoreResult<Option<Event>>;

    /// Same lookup as [`EventStore::find_event`], with speakers in insertion order.
    async fn find_event_with_speakers(&self, id: Uuid) -> StoreResult<Option<EventWithSpeakers>>;

    async fn insert_event(&self, event: &Event) -> StoreResult<()>;

    /// Overwrites title, description and dates only. Returns `false` when no
    /// row has that id.
    async fn update_event_fields(&self, id: Uuid, input: &EventInput) -> StoreResult<bool>;

    /// Sets `is_deleted` and nothing else. Returns `false` when no row has that id.
    async fn soft_delete_event(&self, id: Uuid) -> StoreResult<bool>;

    async fn event_exists(&self, id: Uuid) -> StoreResult<bool>;

    async fn insert_speaker(&self, speaker: &Speaker) -> StoreResult<()>;
}
