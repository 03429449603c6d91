pub mod app;
pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ordering;
pub mod state;
pub mod storage;
pub mod streak;
pub mod tracking;
pub mod ui;
pub mod views;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::load_data;
