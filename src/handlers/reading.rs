use super::{owner, required, save};
use crate::errors::AppError;
use crate::models::{Book, BookFilter, BookUpdate, NewBook, non_blank};
use crate::state::AppState;
use crate::views::{book_list, genres};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::info;

pub async fn list(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Query(filter): Query<BookFilter>,
) -> Result<Json<Vec<Book>>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(book_list(&data, &owner, &filter)))
}

pub async fn list_genres(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(genres(&data, &owner)))
}

pub async fn create(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewBook>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let owner = owner(&state, &user)?;
    let title = required("title", &payload.title)?;

    let mut data = state.data.lock().await;
    let book = data
        .books
        .insert_with(|id| Book {
            id,
            user_name: owner.clone(),
            title,
            author: non_blank(payload.author),
            genre: non_blank(payload.genre),
            status: payload.status.unwrap_or_default(),
            date_started: None,
            date_finished: None,
            created_at: Utc::now(),
        })
        .clone();
    save(&state, &data).await?;
    info!(user = %owner, id = book.id, "book added");

    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
    Json(payload): Json<BookUpdate>,
) -> Result<Json<Book>, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    let book = data
        .books
        .get_owned_mut(&owner, id)
        .ok_or_else(|| AppError::not_found("book not found"))?;
    if let Some(status) = payload.status {
        book.status = status;
    }
    if let Some(date_started) = payload.date_started {
        book.date_started = date_started;
    }
    if let Some(date_finished) = payload.date_finished {
        book.date_finished = date_finished;
    }
    let book = book.clone();
    save(&state, &data).await?;
    info!(user = %owner, id, status = ?book.status, "book updated");

    Ok(Json(book))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.books.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("book not found"));
    }
    data.books.remove(id);
    save(&state, &data).await?;
    info!(user = %owner, id, "book deleted");

    Ok(StatusCode::NO_CONTENT)
}
