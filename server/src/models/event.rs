use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::speaker::Speaker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_deleted: bool,
}

/// Body accepted by create and update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub title: String,
    pub description: String,
    #[serde(deserialize_with = "crate::models::timestamp::deserialize")]
    pub start_date: DateTime<Utc>,
    #[serde(deserialize_with = "crate::models::timestamp::deserialize")]
    pub end_date: DateTime<Utc>,
}

/// Single-event view returned by `GET /api/events/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithSpeakers {
    #[serde(flatten)]
    pub event: Event,
    pub speakers: Vec<Speaker>,
}

impl Event {
    pub fn new(input: EventInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            is_deleted: false,
        }
    }

    /// Overwrites the editable fields. `id` and `is_deleted` are left alone.
    pub fn update(&mut self, input: EventInput) {
        self.title = input.title;
        self.description = input.description;
        self.start_date = input.start_date;
        self.end_date = input.end_date;
    }

    /// Soft delete: the row stays, it just drops out of listings.
    pub fn delete(&mut self) {
        self.is_deleted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input(title: &str) -> EventInput {
        EventInput {
            title: title.to_string(),
            description: "D".to_string(),
            start_date: Utc.with_ymd_and_hms(2023, 7, 27, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2023, 7, 28, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_new_event_is_not_deleted() {
        let event = Event::new(input("Conf"));
        assert!(!event.is_deleted);
        assert_eq!(event.title, "Conf");
    }

    #[test]
    fn test_update_keeps_id_and_deleted_flag() {
        let mut event = Event::new(input("Conf"));
        event.delete();
        let id = event.id;

        let mut changed = input("RustConf");
        changed.end_date = Utc.with_ymd_and_hms(2023, 7, 30, 0, 0, 0).unwrap();
        event.update(changed.clone());

        assert_eq!(event.id, id);
        assert!(event.is_deleted);
        assert_eq!(event.title, "RustConf");
        assert_eq!(event.end_date, changed.end_date);
    }

    #[test]
    fn test_serializes_camel_case() {
        let event = Event::new(input("Conf"));
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["startDate"], "2023-07-27T00:00:00Z");
        assert_eq!(value["endDate"], "2023-07-28T00:00:00Z");
        assert_eq!(value["isDeleted"], false);
        assert!(value.get("speakers").is_none());
    }

    #[test]
    fn test_input_accepts_timestamp_without_offset() {
        let input: EventInput = serde_json::from_value(serde_json::json!({
            "title": "Conf",
            "description": "D",
            "startDate": "2023-07-27T17:59:14.141",
            "endDate": "2023-07-28T09:00:00Z",
        }))
        .unwrap();

        assert_eq!(input.start_date.to_rfc3339(), "2023-07-27T17:59:14.141+00:00");
        assert_eq!(input.end_date, Utc.with_ymd_and_hms(2023, 7, 28, 9, 0, 0).unwrap());
    }

    #[test]
    fn test_event_with_speakers_is_flat() {
        let event = Event::new(input("Conf"));
        let view = EventWithSpeakers {
            event: event.clone(),
            speakers: Vec::new(),
        };
        let value = serde_json::to_value(&view).unwrap();

        assert_eq!(value["id"], event.id.to_string());
        assert_eq!(value["title"], "Conf");
        assert_eq!(value["speakers"], serde_json::json!([]));
    }
}
