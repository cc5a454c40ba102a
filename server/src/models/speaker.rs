use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: Uuid,
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_profile: String,
    pub event_id: Uuid,
}

/// Body accepted by `POST /api/events/:id/speakers`. Any `eventId` sent by
/// the client is dropped here; the owner always comes from the path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerInput {
    pub name: String,
    pub talk_title: String,
    pub talk_description: String,
    pub linked_in_profile: String,
}

impl Speaker {
    pub fn new(event_id: Uuid, input: SpeakerInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            talk_title: input.talk_title,
            talk_description: input.talk_description,
            linked_in_profile: input.linked_in_profile,
            event_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_event_id_is_ignored() {
        let path_id = Uuid::new_v4();
        let input: SpeakerInput = serde_json::from_value(serde_json::json!({
            "name": "Ada",
            "talkTitle": "Engines",
            "talkDescription": "Analytical",
            "linkedInProfile": "https://linkedin.com/in/ada",
            "eventId": Uuid::new_v4(),
        }))
        .unwrap();

        let speaker = Speaker::new(path_id, input);
        assert_eq!(speaker.event_id, path_id);
        assert_eq!(speaker.linked_in_profile, "https://linkedin.com/in/ada");
    }

    #[test]
    fn test_serializes_camel_case() {
        let speaker = Speaker::new(
            Uuid::nil(),
            SpeakerInput {
                name: "Ada".to_string(),
                talk_title: "Engines".to_string(),
                talk_description: "Analytical".to_string(),
                linked_in_profile: "ada".to_string(),
            },
        );
        let value = serde_json::to_value(&speaker).unwrap();

        assert_eq!(value["talkTitle"], "Engines");
        assert_eq!(value["talkDescription"], "Analytical");
        assert_eq!(value["linkedInProfile"], "ada");
        assert_eq!(value["eventId"], Uuid::nil().to_string());
    }
}
