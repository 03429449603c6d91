use crate::ordering::{Direction, Ranked};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

/// Rows addressed by a per-table id.
pub trait Row {
    fn id(&self) -> u64;
}

/// Rows scoped to one profile.
pub trait Owned: Row {
    fn owner(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub user_name: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stretch {
    pub id: u64,
    pub user_name: String,
    pub name: String,
    pub body_area: Option<String>,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
}

/// One day on which a habit or stretch was marked done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub id: u64,
    pub item_id: u64,
    pub completed_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    ToRead,
    Reading,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub user_name: String,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub status: BookStatus,
    pub date_started: Option<NaiveDate>,
    pub date_finished: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezerItem {
    pub id: u64,
    pub user_name: String,
    pub name: String,
    pub quantity: Option<String>,
    pub date_added: NaiveDate,
    pub priority: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u64,
    pub user_name: String,
    pub name: String,
    pub link: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

macro_rules! owned_row {
    ($($ty:ty),+) => {
        $(
            impl Row for $ty {
                fn id(&self) -> u64 {
                    self.id
                }
            }

            impl Owned for $ty {
                fn owner(&self) -> &str {
                    &self.user_name
                }
            }
        )+
    };
}

owned_row!(Habit, Stretch, Book, FreezerItem, Recipe);

impl Row for Completion {
    fn id(&self) -> u64 {
        self.id
    }
}

macro_rules! ranked_row {
    ($($ty:ty),+) => {
        $(
            impl Ranked for $ty {
                fn id(&self) -> u64 {
                    self.id
                }

                fn priority(&self) -> i64 {
                    self.priority
                }

                fn set_priority(&mut self, priority: i64) {
                    self.priority = priority;
                }

                fn created_at(&self) -> DateTime<Utc> {
                    self.created_at
                }
            }
        )+
    };
}

ranked_row!(Stretch, FreezerItem);

// Requests

#[derive(Debug, Deserialize)]
pub struct NewHabit {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct NewStretch {
    pub name: String,
    #[serde(default)]
    pub body_area: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: Direction,
}

#[derive(Debug, Deserialize)]
pub struct NewBook {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub status: Option<BookStatus>,
}

/// Partial book edit. A field that is absent is left alone; an explicit
/// `null` date clears it.
#[derive(Debug, Default, Deserialize)]
pub struct BookUpdate {
    #[serde(default)]
    pub status: Option<BookStatus>,
    #[serde(default, deserialize_with = "present")]
    pub date_started: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    pub date_finished: Option<Option<NaiveDate>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct BookFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<BookStatus>,
    #[serde(default)]
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewFreezerItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `?status=` from an unset select means "any status".
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<BookStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => {
            BookStatus::deserialize(IntoDeserializer::<D::Error>::into_deserializer(raw)).map(Some)
        }
    }
}

// Responses

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitView {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub completed_today: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StretchView {
    pub id: u64,
    pub position: usize,
    pub name: String,
    pub body_area: Option<String>,
    pub priority: i64,
    pub completed_today: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StretchList {
    pub completed: usize,
    pub total: usize,
    pub stretches: Vec<StretchView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub id: u64,
    pub date: NaiveDate,
    pub completed: bool,
    pub streak: u32,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCounts {
    pub to_read: usize,
    pub reading: usize,
    pub finished: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub user: String,
    pub date: NaiveDate,
    pub habits_completed: usize,
    pub habits_total: usize,
    pub stretches_completed: usize,
    pub stretches_total: usize,
    pub books: BookCounts,
    pub quick_habits: Vec<HabitView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<String>,
    pub restricted: bool,
}

/// Trims a free-text field; blank input is stored as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_update_distinguishes_null_from_missing() {
        let update: BookUpdate =
            serde_json::from_str(r#"{"date_started": null, "status": "reading"}"#).unwrap();
        assert_eq!(update.status, Some(BookStatus::Reading));
        assert_eq!(update.date_started, Some(None));
        assert_eq!(update.date_finished, None);

        let update: BookUpdate = serde_json::from_str(r#"{"date_finished": "2026-01-05"}"#).unwrap();
        assert_eq!(
            update.date_finished,
            Some(NaiveDate::from_ymd_opt(2026, 1, 5))
        );
    }

    #[test]
    fn book_status_uses_snake_case() {
        assert_eq!(serde_json::to_string(&BookStatus::ToRead).unwrap(), "\"to_read\"");
        let status: BookStatus = serde_json::from_str("\"finished\"").unwrap();
        assert_eq!(status, BookStatus::Finished);
    }

    #[test]
    fn empty_status_filter_means_any() {
        let filter: BookFilter = serde_json::from_str(r#"{"status": "", "genre": ""}"#).unwrap();
        assert_eq!(filter.status, None);

        let filter: BookFilter = serde_json::from_str(r#"{"status": "finished"}"#).unwrap();
        assert_eq!(filter.status, Some(BookStatus::Finished));

        assert!(serde_json::from_str::<BookFilter>(r#"{"status": "lost"}"#).is_err());
    }

    #[test]
    fn non_blank_drops_whitespace() {
        assert_eq!(non_blank(Some("  hamstrings ".into())), Some("hamstrings".into()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
