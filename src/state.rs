use crate::config::{AppConfig, valid_profile_name};
use crate::db::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub data: Arc<Mutex<AppData>>,
    pub profiles: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(config: &AppConfig, data: AppData) -> Self {
        Self {
            data_path: config.data_path.clone(),
            data: Arc::new(Mutex::new(data)),
            profiles: Arc::new(config.profiles.clone()),
        }
    }

    /// Canonical owner name, or `None` when the name is malformed or not one
    /// of the configured profiles.
    pub fn owner(&self, raw: &str) -> Option<String> {
        let name = valid_profile_name(raw)?;
        if self.profiles.is_empty() || self.profiles.contains(&name) {
            Some(name)
        } else {
            None
        }
    }
}
