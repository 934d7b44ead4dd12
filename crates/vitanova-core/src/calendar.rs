//! Counselor availability: a per-date map of bookable time-slot labels.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A counselor's availability, keyed by calendar date.
///
/// Invariant: a date key is never present with an empty slot list.
/// [`AvailabilityCalendar::toggle_slot`] prunes emptied dates, and
/// [`AvailabilityCalendar::prune_empty`] re-establishes the invariant for
/// calendars supplied from outside.
///
/// The calendar is date-agnostic: the booking flow's two-day lookahead
/// window is caller policy, not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AvailabilityCalendar(BTreeMap<Date, Vec<String>>);

impl AvailabilityCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the date has at least one open slot.
    pub fn is_available(&self, date: Date) -> bool {
        self.0.get(&date).is_some_and(|slots| !slots.is_empty())
    }

    /// The slot labels open on `date`, in lexicographic order.
    pub fn slots_for(&self, date: Date) -> &[String] {
        self.0.get(&date).map_or(&[], Vec::as_slice)
    }

    /// Add `slot` on `date` if absent, remove it if present.
    ///
    /// Insertion keeps the slot list sorted and duplicate-free. Removing
    /// the last slot of a date deletes the date key entirely. Applying the
    /// same toggle twice returns the calendar to its original form.
    pub fn toggle_slot(&mut self, date: Date, slot: &str) {
        let slots = self.0.entry(date).or_default();
        match slots.iter().position(|s| s == slot) {
            Some(idx) => {
                slots.remove(idx);
            }
            None => {
                let insert_at = slots.partition_point(|s| s.as_str() < slot);
                slots.insert(insert_at, slot.to_string());
            }
        }
        if slots.is_empty() {
            self.0.remove(&date);
        }
    }

    /// Drop any date keys whose slot list is empty.
    pub fn prune_empty(&mut self) {
        self.0.retain(|_, slots| !slots.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.0.keys().copied()
    }
}
