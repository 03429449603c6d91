use chrono::{Duration, Local, NaiveDate};
use std::collections::BTreeSet;

/// Consecutive completed days ending today, or ending yesterday when today
/// has not been marked yet.
pub fn compute_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    compute_streak_at(Local::now().date_naive(), dates)
}

pub fn compute_streak_at(today: NaiveDate, dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut cursor = today;
    if !dates.contains(&cursor) {
        cursor = cursor - Duration::days(1);
    }

    let mut streak = 0u32;
    while dates.contains(&cursor) {
        streak = streak.saturating_add(1);
        cursor = cursor - Duration::days(1);
    }

    streak
}
