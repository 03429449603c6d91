use crate::db::AppData;
use crate::models::{
    Book, BookCounts, BookFilter, BookStatus, DashboardResponse, FreezerItem, Habit, HabitView,
    Recipe, StretchList, StretchView,
};
use crate::tracking::{CompletionLog, streak_for};
use chrono::NaiveDate;
use std::collections::HashSet;

const QUICK_HABIT_COUNT: usize = 5;

fn habit_view(data: &AppData, habit: &Habit, today: NaiveDate) -> HabitView {
    HabitView {
        id: habit.id,
        name: habit.name.clone(),
        created_at: habit.created_at,
        completed_today: data.habit_completions.is_completed(habit.id, today),
        streak: streak_for(&data.habit_completions, habit.id, today),
    }
}

fn newest_habits<'a>(data: &'a AppData, owner: &'a str) -> Vec<&'a Habit> {
    let mut habits: Vec<&Habit> = data.habits.owned_by(owner).collect();
    habits.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    habits
}

/// Habits newest first, each with today's state and current streak.
pub fn habit_list_at(data: &AppData, owner: &str, today: NaiveDate) -> Vec<HabitView> {
    newest_habits(data, owner)
        .into_iter()
        .map(|habit| habit_view(data, habit, today))
        .collect()
}

pub fn stretch_list_at(data: &AppData, owner: &str, today: NaiveDate) -> StretchList {
    let stretches: Vec<StretchView> = data
        .stretches
        .ordered_for(owner)
        .into_iter()
        .enumerate()
        .map(|(index, stretch)| StretchView {
            id: stretch.id,
            position: index + 1,
            name: stretch.name.clone(),
            body_area: stretch.body_area.clone(),
            priority: stretch.priority,
            completed_today: data.stretch_completions.is_completed(stretch.id, today),
            streak: streak_for(&data.stretch_completions, stretch.id, today),
        })
        .collect();

    StretchList {
        completed: stretches.iter().filter(|view| view.completed_today).count(),
        total: stretches.len(),
        stretches,
    }
}

pub fn freezer_list(data: &AppData, owner: &str) -> Vec<FreezerItem> {
    data.freezer_items
        .ordered_for(owner)
        .into_iter()
        .cloned()
        .collect()
}

/// Books newest first, narrowed by exact status and genre when given.
pub fn book_list(data: &AppData, owner: &str, filter: &BookFilter) -> Vec<Book> {
    let genre = filter.genre.as_deref().map(str::trim).filter(|g| !g.is_empty());
    let mut books: Vec<Book> = data
        .books
        .owned_by(owner)
        .filter(|book| filter.status.is_none_or(|status| book.status == status))
        .filter(|book| genre.is_none_or(|genre| book.genre.as_deref() == Some(genre)))
        .cloned()
        .collect();
    books.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    books
}

/// Distinct non-empty genres, in first-seen order.
pub fn genres(data: &AppData, owner: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    data.books
        .owned_by(owner)
        .filter_map(|book| book.genre.as_deref())
        .filter(|genre| !genre.is_empty())
        .filter(|genre| seen.insert(*genre))
        .map(str::to_string)
        .collect()
}

pub fn book_counts(data: &AppData, owner: &str) -> BookCounts {
    data.books
        .owned_by(owner)
        .fold(BookCounts::default(), |mut counts, book| {
            match book.status {
                BookStatus::ToRead => counts.to_read += 1,
                BookStatus::Reading => counts.reading += 1,
                BookStatus::Finished => counts.finished += 1,
            }
            counts
        })
}

pub fn recipe_list(data: &AppData, owner: &str) -> Vec<Recipe> {
    let mut recipes: Vec<Recipe> = data.recipes.owned_by(owner).cloned().collect();
    recipes.sort_by_cached_key(|recipe| (recipe.name.to_lowercase(), recipe.id));
    recipes
}

pub fn dashboard_at(data: &AppData, owner: &str, today: NaiveDate) -> DashboardResponse {
    let habits = newest_habits(data, owner);
    let habits_completed = habits
        .iter()
        .filter(|habit| data.habit_completions.is_completed(habit.id, today))
        .count();

    let stretches_total = data.stretches.owned_by(owner).count();
    let stretches_completed = data
        .stretches
        .owned_by(owner)
        .filter(|stretch| data.stretch_completions.is_completed(stretch.id, today))
        .count();

    DashboardResponse {
        user: owner.to_string(),
        date: today,
        habits_completed,
        habits_total: habits.len(),
        stretches_completed,
        stretches_total,
        books: book_counts(data, owner),
        quick_habits: habits
            .iter()
            .take(QUICK_HABIT_COUNT)
            .map(|habit| habit_view(data, habit, today))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stretch;
    use chrono::{Duration, TimeZone, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn add_habit(data: &mut AppData, owner: &str, name: &str, minute: u32) -> u64 {
        data.habits
            .insert_with(|id| Habit {
                id,
                user_name: owner.to_string(),
                name: name.to_string(),
                created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, minute, 0).unwrap(),
            })
            .id
    }

    fn add_book(data: &mut AppData, owner: &str, title: &str, genre: Option<&str>, status: BookStatus) {
        data.books.insert_with(|id| Book {
            id,
            user_name: owner.to_string(),
            title: title.to_string(),
            author: None,
            genre: genre.map(str::to_string),
            status,
            date_started: None,
            date_finished: None,
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap() + Duration::minutes(id as i64),
        });
    }

    #[test]
    fn habits_list_newest_first_with_streaks() {
        let mut data = AppData::default();
        let older = add_habit(&mut data, "ana", "water", 0);
        let newer = add_habit(&mut data, "ana", "walk", 5);
        add_habit(&mut data, "ben", "read", 9);
        for offset in 1..4 {
            data.habit_completions
                .insert_completion(older, today() - Duration::days(offset));
        }
        data.habit_completions.insert_completion(newer, today());

        let views = habit_list_at(&data, "ana", today());
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, newer);
        assert!(views[0].completed_today);
        assert_eq!(views[0].streak, 1);
        assert_eq!(views[1].id, older);
        assert!(!views[1].completed_today);
        assert_eq!(views[1].streak, 3);
    }

    #[test]
    fn stretch_list_reports_progress_and_positions() {
        let mut data = AppData::default();
        for (name, priority) in [("neck", 2), ("calves", 1), ("hips", 3)] {
            data.stretches.insert_with(|id| Stretch {
                id,
                user_name: "ana".to_string(),
                name: name.to_string(),
                body_area: None,
                priority,
                created_at: Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap(),
            });
        }
        data.stretch_completions.insert_completion(1, today());

        let list = stretch_list_at(&data, "ana", today());
        let names: Vec<&str> = list.stretches.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["calves", "neck", "hips"]);
        assert_eq!(list.stretches[1].position, 2);
        assert_eq!(list.completed, 1);
        assert_eq!(list.total, 3);
    }

    #[test]
    fn book_filters_and_genres() {
        let mut data = AppData::default();
        add_book(&mut data, "ana", "Dune", Some("sci-fi"), BookStatus::Reading);
        add_book(&mut data, "ana", "Emma", Some("classic"), BookStatus::ToRead);
        add_book(&mut data, "ana", "Solaris", Some("sci-fi"), BookStatus::Finished);
        add_book(&mut data, "ana", "Notes", None, BookStatus::ToRead);
        add_book(&mut data, "ben", "Hidden", Some("horror"), BookStatus::ToRead);

        let all = book_list(&data, "ana", &BookFilter::default());
        let titles: Vec<&str> = all.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Notes", "Solaris", "Emma", "Dune"]);

        let sci_fi = book_list(
            &data,
            "ana",
            &BookFilter {
                status: None,
                genre: Some("sci-fi".into()),
            },
        );
        assert_eq!(sci_fi.len(), 2);

        let to_read = book_list(
            &data,
            "ana",
            &BookFilter {
                status: Some(BookStatus::ToRead),
                genre: None,
            },
        );
        assert_eq!(to_read.len(), 2);

        assert_eq!(genres(&data, "ana"), vec!["sci-fi".to_string(), "classic".to_string()]);
        assert_eq!(
            book_counts(&data, "ana"),
            BookCounts {
                to_read: 2,
                reading: 1,
                finished: 1
            }
        );
    }

    #[test]
    fn dashboard_caps_quick_habits() {
        let mut data = AppData::default();
        let ids: Vec<u64> = (0..7)
            .map(|minute| add_habit(&mut data, "ana", "habit", minute))
            .collect();
        data.habit_completions.insert_completion(ids[0], today());
        data.habit_completions.insert_completion(ids[6], today());

        let dashboard = dashboard_at(&data, "ana", today());
        assert_eq!(dashboard.habits_total, 7);
        assert_eq!(dashboard.habits_completed, 2);
        assert_eq!(dashboard.quick_habits.len(), 5);
        assert_eq!(dashboard.quick_habits[0].id, ids[6]);
        assert_eq!(dashboard.stretches_total, 0);
    }
}
