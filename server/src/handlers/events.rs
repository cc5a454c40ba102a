//! Handlers for `/api/events`.

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use uuid::Uuid;

use super::AppState;
use crate::models::{Event, EventInput, EventWithSpeakers, Speaker, SpeakerInput};
use crate::utils::error::AppError;
use crate::utils::response::{created, no_content};

fn event_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Event with id '{}' was not found", id))
}

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.store.list_active_events().await?;
    Ok(Json(events))
}

/// GET /api/events/:id
///
/// Soft-deleted events are still returned here.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventWithSpeakers>, AppError> {
    let event = state
        .store
        .find_event_with_speakers(id)
        .await?
        .ok_or_else(|| event_not_found(id))?;

    Ok(Json(event))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<EventInput>,
) -> Result<Response, AppError> {
    let event = Event::new(input);
    state.store.insert_event(&event).await?;

    tracing::info!(event_id = %event.id, "Event created");

    Ok(created(format!("/api/events/{}", event.id), event))
}

/// PUT /api/events/:id
///
/// Only the four editable fields are written, so a concurrent delete is never
/// undone.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<EventInput>,
) -> Result<Response, AppError> {
    if !state.store.update_event_fields(id, &input).await? {
        return Err(event_not_found(id));
    }

    tracing::info!(event_id = %id, "Event updated");

    Ok(no_content())
}

/// DELETE /api/events/:id
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if !state.store.soft_delete_event(id).await? {
        return Err(event_not_found(id));
    }

    tracing::info!(event_id = %id, "Event soft deleted");

    Ok(no_content())
}

/// POST /api/events/:id/speakers
///
/// The parent may be soft deleted; it only has to exist.
pub async fn add_speaker(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<SpeakerInput>,
) -> Result<Response, AppError> {
    let speaker = Speaker::new(id, input);

    if !state.store.event_exists(id).await? {
        return Err(event_not_found(id));
    }

    state.store.insert_speaker(&speaker).await?;

    tracing::info!(event_id = %id, speaker_id = %speaker.id, "Speaker added");

    Ok(no_content())
}
