use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::members::storage;
use crate::models::member::MemberRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub joined_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMember {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub joined_year: Option<i32>,
}

/// GET /api/v1/members
pub async fn handle_list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberRow>>, AppError> {
    Ok(Json(storage::list_members(&state.db).await?))
}

/// GET /api/v1/members/:id
pub async fn handle_get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberRow>, AppError> {
    storage::get_member(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Member {id} not found")))
}

/// POST /api/v1/members
pub async fn handle_create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMember>,
) -> Result<(StatusCode, Json<MemberRow>), AppError> {
    if req.first_name.trim().is_empty() || req.last_name.trim().is_empty() {
        return Err(AppError::Validation(
            "Member name must not be empty".to_string(),
        ));
    }
    let member = storage::insert_member(
        &state.db,
        Uuid::new_v4(),
        req.first_name.trim(),
        req.last_name.trim(),
        req.email.as_deref(),
        req.phone.as_deref(),
        req.joined_year,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// PATCH /api/v1/members/:id
pub async fn handle_update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMember>,
) -> Result<Json<MemberRow>, AppError> {
    storage::update_member(
        &state.db,
        id,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        req.email.as_deref(),
        req.phone.as_deref(),
        req.joined_year,
    )
    .await?
    .map(Json)
    .ok_or_else(|| AppError::NotFound(format!("Member {id} not found")))
}

/// DELETE /api/v1/members/:id
pub async fn handle_delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !storage::delete_member(&state.db, id).await? {
        return Err(AppError::NotFound(format!("Member {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
