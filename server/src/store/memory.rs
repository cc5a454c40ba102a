use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{EventStore, StoreResult};
use crate::models::{Event, EventInput, EventWithSpeakers, Speaker};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<Event>>,
    speakers: RwLock<Vec<Speaker>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speaker_count(&self) -> usize {
        self.speakers.read().len()
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn list_active_events(&self) -> StoreResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .events
            .read()
            .iter()
            .filter(|event| !event.is_deleted)
            .cloned()
            .collect();
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn find_event(&self, id: Uuid) -> StoreResult<Option<Event>> {
        Ok(self.events.read().iter().find(|event| event.id == id).cloned())
    }

    async fn find_event_with_speakers(&self, id: Uuid) -> StoreResult<Option<EventWithSpeakers>> {
        let Some(event) = self.find_event(id).await? else {
            return Ok(None);
        };

        let speakers = self
            .speakers
            .read()
            .iter()
            .filter(|speaker| speaker.event_id == id)
            .cloned()
            .collect();

        Ok(Some(EventWithSpeakers { event, speakers }))
    }

    async fn insert_event(&self, event: &Event) -> StoreResult<()> {
        self.events.write().push(event.clone());
        Ok(())
    }

    async fn update_event_fields(&self, id: Uuid, input: &EventInput) -> StoreResult<bool> {
        let mut events = self.events.write();
        let Some(stored) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(false);
        };
        stored.update(input.clone());
        Ok(true)
    }

    async fn soft_delete_event(&self, id: Uuid) -> StoreResult<bool> {
        let mut events = self.events.write();
        let Some(stored) = events.iter_mut().find(|event| event.id == id) else {
            return Ok(false);
        };
        stored.delete();
        Ok(true)
    }

    async fn event_exists(&self, id: Uuid) -> StoreResult<bool> {
        Ok(self.events.read().iter().any(|event| event.id == id))
    }

    async fn insert_speaker(&self, speaker: &Speaker) -> StoreResult<()> {
        // Mirror the foreign key on speakers.event_id.
        if !self.event_exists(speaker.event_id).await? {
            return Err(sqlx::Error::RowNotFound);
        }
        self.speakers.write().push(speaker.clone());
        Ok(())
    }
}
