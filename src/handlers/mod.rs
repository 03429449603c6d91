pub mod dashboard;
pub mod food;
pub mod habits;
pub mod reading;
pub mod stretches;

use crate::db::AppData;
use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html};
use chrono::{Local, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.profiles))
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Resolves the `{user}` path segment. Unknown profiles read as missing,
/// like rows of another profile do.
pub(crate) fn owner(state: &AppState, user: &str) -> Result<String, AppError> {
    state
        .owner(user)
        .ok_or_else(|| AppError::not_found(format!("unknown profile '{}'", user.trim())))
}

pub(crate) fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

pub(crate) async fn save(state: &AppState, data: &AppData) -> Result<(), AppError> {
    persist_data(&state.data_path, data).await
}
