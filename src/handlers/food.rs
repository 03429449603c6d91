use super::{owner, required, save, today};
use crate::errors::AppError;
use crate::models::{FreezerItem, MoveRequest, NewFreezerItem, NewRecipe, Recipe, non_blank};
use crate::state::AppState;
use crate::tracking::{PriorityList, move_item};
use crate::views::{freezer_list, recipe_list};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use tracing::{debug, info};

pub async fn list_freezer(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<FreezerItem>>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(freezer_list(&data, &owner)))
}

pub async fn create_freezer_item(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewFreezerItem>,
) -> Result<(StatusCode, Json<FreezerItem>), AppError> {
    let owner = owner(&state, &user)?;
    let name = required("name", &payload.name)?;
    let quantity = non_blank(payload.quantity);

    let mut data = state.data.lock().await;
    let priority = data.freezer_items.next_priority(&owner);
    let item = data
        .freezer_items
        .insert_with(|id| FreezerItem {
            id,
            user_name: owner.clone(),
            name,
            quantity,
            date_added: today(),
            priority,
            created_at: Utc::now(),
        })
        .clone();
    save(&state, &data).await?;
    info!(user = %owner, id = item.id, priority, "freezer item added");

    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn reorder_freezer_item(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
    Json(payload): Json<MoveRequest>,
) -> Result<Json<Vec<FreezerItem>>, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.freezer_items.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("freezer item not found"));
    }
    match move_item(&mut data.freezer_items, &owner, id, payload.direction) {
        Some(updates) => {
            save(&state, &data).await?;
            info!(user = %owner, id, direction = ?payload.direction, ?updates, "freezer item moved");
        }
        None => debug!(user = %owner, id, direction = ?payload.direction, "freezer move ignored"),
    }

    Ok(Json(freezer_list(&data, &owner)))
}

/// Marks a freezer item as used up.
pub async fn delete_freezer_item(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.freezer_items.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("freezer item not found"));
    }
    data.freezer_items.remove(id);
    save(&state, &data).await?;
    info!(user = %owner, id, "freezer item used");

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_recipes(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    Ok(Json(recipe_list(&data, &owner)))
}

pub async fn get_recipe(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<Json<Recipe>, AppError> {
    let owner = owner(&state, &user)?;
    let data = state.data.lock().await;
    data.recipes
        .get_owned(&owner, id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("recipe not found"))
}

pub async fn create_recipe(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Json(payload): Json<NewRecipe>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let owner = owner(&state, &user)?;
    let name = required("name", &payload.name)?;

    let mut data = state.data.lock().await;
    let recipe = data
        .recipes
        .insert_with(|id| Recipe {
            id,
            user_name: owner.clone(),
            name,
            link: non_blank(payload.link),
            ingredients: non_blank(payload.ingredients),
            instructions: non_blank(payload.instructions),
            notes: non_blank(payload.notes),
            created_at: Utc::now(),
        })
        .clone();
    save(&state, &data).await?;
    info!(user = %owner, id = recipe.id, "recipe added");

    Ok((StatusCode::CREATED, Json(recipe)))
}

pub async fn delete_recipe(
    State(state): State<AppState>,
    Path((user, id)): Path<(String, u64)>,
) -> Result<StatusCode, AppError> {
    let owner = owner(&state, &user)?;

    let mut data = state.data.lock().await;
    if data.recipes.get_owned(&owner, id).is_none() {
        return Err(AppError::not_found("recipe not found"));
    }
    data.recipes.remove(id);
    save(&state, &data).await?;
    info!(user = %owner, id, "recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}
