use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::events::storage;
use crate::fixtures::calendar::{compose_date, day_of_year};
use crate::fixtures::types::STANDARD_DURATION;
use crate::fixtures::validation::valid_start_time;
use crate::models::event::{EventRow, NewEvent, EVENT_STATUSES, STATUS_NEW};
use crate::state::AppState;

/// Payload for creating a single event outside an import. The month is
/// 1-based as entered; storage is 0-based like everything else, and the
/// day-of-year ordinal is always recomputed server-side.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub subject: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub start_time: String,
    pub home_away: String,
    #[serde(default)]
    pub dress: String,
    #[serde(default)]
    pub mix: Option<String>,
    #[serde(default)]
    pub rinks: Option<i32>,
    #[serde(default)]
    pub event_type: Option<String>,
}

/// GET /api/v1/events
pub async fn handle_list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventRow>>, AppError> {
    Ok(Json(storage::list_events(&state.db).await?))
}

/// GET /api/v1/events/:id
pub async fn handle_get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventRow>, AppError> {
    storage::get_event(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))
}

/// POST /api/v1/events
pub async fn handle_create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEvent>,
) -> Result<(StatusCode, Json<NewEvent>), AppError> {
    if req.subject.trim().is_empty() {
        return Err(AppError::Validation("Missing subject".to_string()));
    }
    let date = compose_date(req.year, req.month, req.day).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid date: {}-{:02}-{:02}",
            req.year, req.month, req.day
        ))
    })?;
    if !valid_start_time(&req.start_time) {
        return Err(AppError::Validation(format!(
            "Invalid start time: {}",
            req.start_time
        )));
    }
    let home_away = req.home_away.to_lowercase();
    if home_away != "home" && home_away != "away" {
        return Err(AppError::Validation(format!(
            "Invalid home/away marker: {}",
            req.home_away
        )));
    }

    let event = NewEvent {
        event_id: Uuid::new_v4(),
        subject: req.subject.trim().to_string(),
        status: STATUS_NEW.to_string(),
        req_year: req.year,
        req_month: req.month as i32 - 1,
        req_date: req.day as i32,
        req_jdate: day_of_year(date),
        start_time: req.start_time,
        home_away,
        dress: req.dress,
        mix: req.mix.unwrap_or_else(|| "X".to_string()),
        duration: STANDARD_DURATION,
        rinks: req.rinks.unwrap_or(0),
        event_type: req.event_type.unwrap_or_else(|| "club_event".to_string()),
        cal_key: "club".to_string(),
    };
    storage::insert_event(&state.db, &event).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// PATCH /api/v1/events/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdate>,
) -> Result<StatusCode, AppError> {
    if !EVENT_STATUSES.contains(&req.status.as_str()) {
        return Err(AppError::Validation(format!(
            "Invalid status: {}",
            req.status
        )));
    }
    if !storage::update_status(&state.db, id, &req.status).await? {
        return Err(AppError::NotFound(format!("Event {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/events/:id
pub async fn handle_delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !storage::delete_event(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Event {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
