//! Storage-facing half of the streak and reordering logic.
//!
//! The algorithms in [`crate::streak`] and [`crate::ordering`] only see
//! snapshots. The traits here are the narrow surface they need from storage,
//! so the fetch, compute, write sequence can move behind a transactional
//! backend without touching the algorithms.

use crate::ordering::{self, Direction, PrioritySlot, PriorityUpdate};
use crate::streak::compute_streak_at;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

pub trait PriorityList {
    /// The owner's items, ascending by priority with the tie-break applied.
    fn ordered_slots(&self, owner: &str) -> Vec<PrioritySlot>;

    /// Unconditional overwrite. Returns `false` when the id is unknown.
    fn write_priority(&mut self, id: u64, priority: i64) -> bool;

    fn next_priority(&self, owner: &str) -> i64 {
        ordering::next_priority(self.ordered_slots(owner).iter().map(|slot| slot.priority))
    }
}

pub trait CompletionLog {
    fn completion_dates(&self, item: u64) -> BTreeSet<NaiveDate>;
    fn find_completion(&self, item: u64, date: NaiveDate) -> Option<u64>;
    fn insert_completion(&mut self, item: u64, date: NaiveDate) -> u64;
    fn delete_completion(&mut self, id: u64) -> bool;
    fn delete_for_item(&mut self, item: u64) -> usize;

    fn is_completed(&self, item: u64, date: NaiveDate) -> bool {
        self.find_completion(item, date).is_some()
    }
}

/// Moves `target` one place in the owner's list. `None` means nothing was
/// written: the target is not in the list or already sits at the edge.
pub fn move_item<L: PriorityList + ?Sized>(
    list: &mut L,
    owner: &str,
    target: u64,
    direction: Direction,
) -> Option<[PriorityUpdate; 2]> {
    let slots = list.ordered_slots(owner);
    let updates = ordering::compute_swap(&slots, target, direction)?;

    // Two independent writes; a failure between them is corrected by the next
    // successful move.
    for update in &updates {
        if !list.write_priority(update.id, update.priority) {
            debug!(id = update.id, "priority write skipped, row vanished");
        }
    }

    Some(updates)
}

/// Flips the completion for `(item, date)`. Returns whether the item is
/// completed afterwards.
pub fn toggle_completion<L: CompletionLog + ?Sized>(log: &mut L, item: u64, date: NaiveDate) -> bool {
    match log.find_completion(item, date) {
        Some(existing) => {
            log.delete_completion(existing);
            false
        }
        None => {
            log.insert_completion(item, date);
            true
        }
    }
}

pub fn streak_for<L: CompletionLog + ?Sized>(log: &L, item: u64, today: NaiveDate) -> u32 {
    compute_streak_at(today, &log.completion_dates(item))
}
