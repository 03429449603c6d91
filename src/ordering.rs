//! Manual ordering by sparse integer priority.
//!
//! Lists are kept sorted ascending by `priority`; moving an item swaps its
//! priority with the adjacent item's, so no other row is rewritten.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySlot {
    pub id: u64,
    pub priority: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityUpdate {
    pub id: u64,
    pub priority: i64,
}

/// Rows that carry a manual sort key.
pub trait Ranked {
    fn id(&self) -> u64;
    fn priority(&self) -> i64;
    fn set_priority(&mut self, priority: i64);
    fn created_at(&self) -> DateTime<Utc>;
}

/// Returns the two writes that swap `target` with its neighbour, or `None`
/// when the target is missing or already at the edge of the list.
pub fn compute_swap(
    items: &[PrioritySlot],
    target: u64,
    direction: Direction,
) -> Option<[PriorityUpdate; 2]> {
    let current_index = items.iter().position(|slot| slot.id == target)?;
    let swap_index = match direction {
        Direction::Up => current_index.checked_sub(1)?,
        Direction::Down => current_index + 1,
    };
    let neighbour = items.get(swap_index)?;
    let current = items[current_index];

    Some([
        PriorityUpdate {
            id: current.id,
            priority: neighbour.priority,
        },
        PriorityUpdate {
            id: neighbour.id,
            priority: current.priority,
        },
    ])
}

/// Priority for an item appended to the end of a list.
pub fn next_priority(existing: impl IntoIterator<Item = i64>) -> i64 {
    existing
        .into_iter()
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Ascending priority; equal priorities fall back to creation time, then id.
pub fn priority_order<T: Ranked + ?Sized>(a: &T, b: &T) -> Ordering {
    a.priority()
        .cmp(&b.priority())
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().cmp(&b.id()))
}

pub fn sort_by_priority<T: Ranked>(items: &mut [T]) {
    items.sort_by(priority_order);
}

pub fn slots<'a, T: Ranked + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<PrioritySlot> {
    items
        .into_iter()
        .map(|item| PrioritySlot {
            id: item.id(),
            priority: item.priority(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const A: u64 = 1;
    const B: u64 = 2;
    const C: u64 = 3;

    fn abc() -> Vec<PrioritySlot> {
        vec![
            PrioritySlot { id: A, priority: 1 },
            PrioritySlot { id: B, priority: 2 },
            PrioritySlot { id: C, priority: 3 },
        ]
    }

    fn apply(items: &[PrioritySlot], updates: &[PriorityUpdate]) -> Vec<u64> {
        let mut items = items.to_vec();
        for update in updates {
            if let Some(slot) = items.iter_mut().find(|slot| slot.id == update.id) {
                slot.priority = update.priority;
            }
        }
        items.sort_by_key(|slot| slot.priority);
        items.into_iter().map(|slot| slot.id).collect()
    }

    #[test]
    fn move_up_swaps_with_previous() {
        let items = abc();
        let updates = compute_swap(&items, B, Direction::Up).expect("swap");
        assert_eq!(
            updates,
            [
                PriorityUpdate { id: B, priority: 1 },
                PriorityUpdate { id: A, priority: 2 },
            ]
        );
        assert_eq!(apply(&items, &updates), vec![B, A, C]);
    }

    #[test]
    fn move_down_swaps_with_next() {
        let items = abc();
        let updates = compute_swap(&items, B, Direction::Down).expect("swap");
        assert_eq!(
            updates,
            [
                PriorityUpdate { id: B, priority: 3 },
                PriorityUpdate { id: C, priority: 2 },
            ]
        );
        assert_eq!(apply(&items, &updates), vec![A, C, B]);
    }

    #[test]
    fn edges_are_no_ops() {
        let items = abc();
        assert_eq!(compute_swap(&items, A, Direction::Up), None);
        assert_eq!(compute_swap(&items, C, Direction::Down), None);
    }

    #[test]
    fn unknown_target_is_no_op() {
        assert_eq!(compute_swap(&abc(), 99, Direction::Up), None);
        assert_eq!(compute_swap(&[], A, Direction::Down), None);
    }

    #[test]
    fn sparse_priorities_swap_values() {
        let items = vec![
            PrioritySlot { id: A, priority: 10 },
            PrioritySlot { id: B, priority: 40 },
        ];
        let updates = compute_swap(&items, A, Direction::Down).expect("swap");
        assert_eq!(updates[0], PriorityUpdate { id: A, priority: 40 });
        assert_eq!(updates[1], PriorityUpdate { id: B, priority: 10 });
    }

    #[test]
    fn next_priority_appends_after_max() {
        assert_eq!(next_priority(abc().iter().map(|slot| slot.priority)), 4);
        assert_eq!(next_priority([7, -2, 3]), 8);
        assert_eq!(next_priority(Vec::new()), 1);
    }

    #[test]
    fn direction_reads_lowercase_words() {
        let up: Direction = serde_json::from_str("\"up\"").unwrap();
        let down: Direction = serde_json::from_str("\"down\"").unwrap();
        assert_eq!((up, down), (Direction::Up, Direction::Down));
        assert!(serde_json::from_str::<Direction>("\"Up\"").is_err());
    }

    struct Row {
        id: u64,
        priority: i64,
        created_at: DateTime<Utc>,
    }

    impl Ranked for Row {
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

    #[test]
    fn ties_break_on_creation_then_id() {
        let early = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2026, 1, 2, 8, 0, 0).unwrap();
        let mut rows = vec![
            Row { id: 4, priority: 2, created_at: early },
            Row { id: 3, priority: 2, created_at: late },
            Row { id: 2, priority: 2, created_at: early },
            Row { id: 1, priority: 5, created_at: early },
        ];
        sort_by_priority(&mut rows);
        let ids: Vec<u64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }
}
