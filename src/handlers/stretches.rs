use super::{owner, required, save, today};
use crate::errors::AppError;
use crate::models::{MoveRequest, NewStretch, Stretch, StretchList, ToggleResponse, non_blank};
use crate::state::AppState;
use crate::tracking::{CompletionLog, PriorityList, move_item, streak_for, toggle_completion};
use crate::views::stretch_list_at;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{debug, info};

pub async fn list(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<StretchList>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(stretch_list_at(&data, &owner, today())))
}

pub async fn create(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewStretch>,
) -> Result<(StatusCode, Json<Stretch>), AppError> {
    let owner = owner(&state, &user)?;
    let name = required("name", &payload.name)?;
    let body_area = non_blank(payload.body_area);

    let mut data = state.data.lock().await;
    let priority = data.stretches.next_priority(&owner);
    let stretch = data
        .stretches
        .insert_with(|id| Stretch {
            id,
            user_name: owner.clone(),
            name,
            body_area,
            priority,
            created_at: Utc::now(),
        })
        .clone();
    save(&state, &data).await?;
    info!(user = %owner, id = stretch.id, priority, "stretch added");

    Ok((StatusCode::CREATED, Json(stretch)))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<Json<ToggleResponse>, AppError> {
    let owner = owner(&state, &user)?;
    let date = today();

    let mut data = state.data.lock().await;
    if data.stretches.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("stretch not found"));
    }
    let completed = toggle_completion(&mut data.stretch_completions, id, date);
    save(&state, &data).await?;
    info!(user = %owner, id, completed, "stretch toggled");

    Ok(Json(ToggleResponse {
        id,
        date,
        completed,
        streak: streak_for(&data.stretch_completions, id, date),
    }))
}

/// Moves a stretch one place and returns the re-derived list. Moving past
/// either end changes nothing.
pub async fn reorder(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<StretchList>, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.stretches.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("stretch not found"));
    }
    match move_item(&mut data.stretches, &owner, id, payload.direction) {
        Some(updates) => {
            save(&state, &data).await?;
            info!(user = %owner, id, direction = ?payload.direction, ?updates, "stretch moved");
        }
        None => debug!(user = %owner, id, direction = ?payload.direction, "stretch move ignored"),
    }

    Ok(Json(stretch_list_at(&data, &owner, today())))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.stretches.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("stretch not found"));
    }
    let removed = data.stretch_completions.delete_for_item(id);
    data.stretches.remove(id);
    save(&state, &data).await?;
    info!(user = %owner, id, completions = removed, "stretch deleted");

    Ok(StatusCode::NO_CONTENT)
}
