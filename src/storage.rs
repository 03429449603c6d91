use crate::db::AppData;
use crate::errors::AppError;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

/// Reads the data file. A missing or unreadable file yields empty data so
/// every page still renders (streaks read as zero, moves become no-ops).
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "no data file yet, starting empty");
            AppData::default()
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    let staging = path.with_extension("json.tmp");
    fs::write(&staging, payload).await.map_err(AppError::internal)?;
    fs::rename(&staging, path).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;
    use chrono::Utc;

    fn temp_path(tag: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("daily_helper_{tag}_{}_{nanos}.json", std::process::id()))
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let data = load_data(&temp_path("missing")).await;
        assert!(data.habits.is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        assert!(data.habits.is_empty());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_rows_load_back() {
        let path = temp_path("persist");
        let mut data = AppData::default();
        data.habits.insert_with(|id| Habit {
            id,
            user_name: "ana".into(),
            name: "stretch".into(),
            created_at: Utc::now(),
        });
        persist_data(&path, &data).await.unwrap();

        let loaded = load_data(&path).await;
        assert_eq!(loaded.habits.len(), 1);
        let next = loaded.habits.iter().next().unwrap();
        assert_eq!(next.name, "stretch");
        let _ = fs::remove_file(&path).await;
    }
}
