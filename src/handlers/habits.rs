use super::{owner, required, save, today};
use crate::errors::AppError;
use crate::models::{Habit, HabitView, NewHabit, ToggleResponse};
use crate::state::AppState;
use crate::tracking::{CompletionLog, streak_for, toggle_completion};
use crate::views::habit_list_at;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::info;

pub async fn list(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<HabitView>>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(habit_list_at(&data, &owner, today())))
}

pub async fn create(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewHabit>,
) -> Result<(StatusCode, Json<HabitView>), AppError> {
    let owner = owner(&state, &user)?;
    let name = required("name", &payload.name)?;

    let mut data = state.data.lock().await;
    let habit = data
        .habits
        .insert_with(|id| Habit {
            id,
            user_name: owner.clone(),
            name,
            created_at: Utc::now(),
        })
        .clone();
    save(&state, &data).await?;
    info!(user = %owner, id = habit.id, "habit added");

    Ok((
        StatusCode::CREATED,
        Json(HabitView {
            id: habit.id,
            name: habit.name,
            created_at: habit.created_at,
            completed_today: false,
            streak: 0,
        }),
    ))
}

pub async fn toggle(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<Json<ToggleResponse>, AppError> {
    let owner = owner(&state, &user)?;
    let date = today();

    let mut data = state.data.lock().await;
    if data.habits.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("habit not found"));
    }
    let completed = toggle_completion(&mut data.habit_completions, id, date);
    save(&state, &data).await?;
    info!(user = %owner, id, completed, "habit toggled");

    Ok(Json(ToggleResponse {
        id,
        date,
        completed,
        streak: streak_for(&data.habit_completions, id, date),
    }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.habits.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("habit not found"));
    }
    let removed = data.habit_completions.delete_for_item(id);
    data.habits.remove(id);
    save(&state, &data).await?;
    info!(user = %owner, id, completions = removed, "habit deleted");

    Ok(StatusCode::NO_CONTENT)
}
