use crate::models::{Book, Completion, FreezerItem, Habit, Owned, Recipe, Row, Stretch};
use crate::ordering::{self, PrioritySlot, Ranked};
use crate::tracking::{CompletionLog, PriorityList};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rows of one kind plus the id sequence that numbers them. Ids are never
/// reused, even after deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table<T> {
    next_id: u64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: Vec::new(),
        }
    }
}

impl<T: Row> Table<T> {
    pub fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(build(id));
        &self.rows[self.rows.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.id() == id)
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        let index = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(index))
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.rows.len();
        self.rows.retain(keep);
        before - self.rows.len()
    }
}

impl<T: Owned> Table<T> {
    pub fn owned_by<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a T> + 'a {
        self.rows.iter().filter(move |row| row.owner() == owner)
    }

    /// Row `id` if it belongs to `owner`; rows of other profiles read as missing.
    pub fn get_owned(&self, owner: &str, id: u64) -> Option<&T> {
        self.get(id).filter(|row| row.owner() == owner)
    }

    pub fn get_owned_mut(&mut self, owner: &str, id: u64) -> Option<&mut T> {
        self.get_mut(id).filter(|row| row.owner() == owner)
    }
}

impl<T: Owned + Ranked> Table<T> {
    pub fn ordered_for<'a>(&'a self, owner: &'a str) -> Vec<&'a T> {
        let mut rows: Vec<&T> = self.owned_by(owner).collect();
        rows.sort_by(|a, b| ordering::priority_order(*a, *b));
        rows
    }
}

impl<T: Owned + Ranked> PriorityList for Table<T> {
    fn ordered_slots(&self, owner: &str) -> Vec<PrioritySlot> {
        ordering::slots(self.ordered_for(owner))
    }

    fn write_priority(&mut self, id: u64, priority: i64) -> bool {
        match self.get_mut(id) {
            Some(row) => {
                row.set_priority(priority);
                true
            }
            None => false,
        }
    }
}

impl CompletionLog for Table<Completion> {
    fn completion_dates(&self, item: u64) -> BTreeSet<NaiveDate> {
        self.rows
            .iter()
            .filter(|row| row.item_id == item)
            .map(|row| row.completed_date)
            .collect()
    }

    fn find_completion(&self, item: u64, date: NaiveDate) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.item_id == item && row.completed_date == date)
            .map(|row| row.id)
    }

    fn insert_completion(&mut self, item: u64, date: NaiveDate) -> u64 {
        self.insert_with(|id| Completion {
            id,
            item_id: item,
            completed_date: date,
        })
        .id
    }

    fn delete_completion(&mut self, id: u64) -> bool {
        self.remove(id).is_some()
    }

    fn delete_for_item(&mut self, item: u64) -> usize {
        self.retain(|row| row.item_id != item)
    }
}

/// Everything persisted in the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
    pub habits: Table<Habit>,
    pub habit_completions: Table<Completion>,
    pub stretches: Table<Stretch>,
    pub stretch_completions: Table<Completion>,
    pub books: Table<Book>,
    pub freezer_items: Table<FreezerItem>,
    pub recipes: Table<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn stretch(id: u64, owner: &str, priority: i64, hour: u32) -> Stretch {
        Stretch {
            id,
            user_name: owner.to_string(),
            name: format!("stretch {id}"),
            body_area: None,
            priority,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut table: Table<Completion> = Table::default();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let first = table.insert_completion(1, date);
        assert!(table.delete_completion(first));
        let second = table.insert_completion(1, date);
        assert_ne!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn ordered_slots_scope_to_owner_and_break_ties() {
        let mut table: Table<Stretch> = Table::default();
        table.insert_with(|id| stretch(id, "ana", 2, 9));
        table.insert_with(|id| stretch(id, "ben", 1, 8));
        table.insert_with(|id| stretch(id, "ana", 2, 7));
        table.insert_with(|id| stretch(id, "ana", 1, 10));

        let ids: Vec<u64> = table.ordered_slots("ana").iter().map(|slot| slot.id).collect();
        assert_eq!(ids, vec![4, 3, 1]);
        assert_eq!(table.next_priority("ana"), 3);
        assert_eq!(table.next_priority("ben"), 2);
        assert_eq!(table.next_priority("cleo"), 1);
    }

    #[test]
    fn get_owned_hides_other_profiles() {
        let mut table: Table<Stretch> = Table::default();
        let id = table.insert_with(|id| stretch(id, "ana", 1, 9)).id;
        assert!(table.get_owned("ana", id).is_some());
        assert!(table.get_owned("ben", id).is_none());
    }

    #[test]
    fn delete_for_item_leaves_other_items() {
        let mut table: Table<Completion> = Table::default();
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        table.insert_completion(1, date);
        table.insert_completion(1, date.pred_opt().unwrap());
        table.insert_completion(2, date);
        assert_eq!(table.delete_for_item(1), 2);
        assert_eq!(table.completion_dates(2).len(), 1);
    }

    #[test]
    fn missing_tables_load_as_empty() {
        let data: AppData = serde_json::from_str(r#"{"habits": {"next_id": 3, "rows": []}}"#).unwrap();
        assert!(data.stretches.is_empty());
        assert!(data.habits.is_empty());
    }
}
