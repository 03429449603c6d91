use crate::handlers::{self, dashboard, food, habits, reading, stretches};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/profiles", get(dashboard::profiles))
        .route("/api/users/:user/dashboard", get(dashboard::summary))
        .route("/api/users/:user/habits", get(habits::list).post(habits::create))
        .route("/api/users/:user/habits/:id", delete(habits::delete))
        .route("/api/users/:user/habits/:id/toggle", post(habits::toggle))
        .route(
            "/api/users/:user/stretches",
            get(stretches::list).post(stretches::create),
        )
        .route("/api/users/:user/stretches/:id", delete(stretches::delete))
        .route("/api/users/:user/stretches/:id/toggle", post(stretches::toggle))
        .route("/api/users/:user/stretches/:id/move", post(stretches::reorder))
        .route("/api/users/:user/books", get(reading::list).post(reading::create))
        .route("/api/users/:user/genres", get(reading::list_genres))
        .route(
            "/api/users/:user/books/:id",
            delete(reading::delete).patch(reading::update),
        )
        .route(
            "/api/users/:user/freezer",
            get(food::list_freezer).post(food::create_freezer_item),
        )
        .route("/api/users/:user/freezer/:id", delete(food::delete_freezer_item))
        .route("/api/users/:user/freezer/:id/move", post(food::reorder_freezer_item))
        .route(
            "/api/users/:user/recipes",
            get(food::list_recipes).post(food::create_recipe),
        )
        .route(
            "/api/users/:user/recipes/:id",
            get(food::get_recipe).delete(food::delete_recipe),
        )
        .with_state(state)
}
