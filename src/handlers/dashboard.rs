use super::{owner, today};
use crate::errors::AppError;
use crate::models::{DashboardResponse, ProfilesResponse};
use crate::state::AppState;
use crate::views::dashboard_at;
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn profiles(State(state): State<AppState>) -> Json<ProfilesResponse> {
    Json(ProfilesResponse {
        profiles: state.profiles.to_vec(),
        restricted: !state.profiles.is_empty(),
    })
}

pub async fn summary(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(dashboard_at(&data, &owner, today())))
}
