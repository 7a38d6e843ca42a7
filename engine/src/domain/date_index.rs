//! Per-date classification of budget entries and schedules.
//!
//! A borrowing view over the caller-owned collections. Every query is a
//! linear scan; at one month of planner data an index structure would be
//! overhead, not a win.

use shared::{BudgetEntry, ScheduleEvent};

/// Classifies entries and schedules by calendar date.
///
/// Dates are compared as canonical ISO strings: exact equality for
/// single-day entries, lexicographic range containment for schedules.
#[derive(Debug, Clone, Copy)]
pub struct DateIndex<'a> {
    entries: &'a [BudgetEntry],
    schedules: &'a [ScheduleEvent],
}

impl<'a> DateIndex<'a> {
    pub fn new(entries: &'a [BudgetEntry], schedules: &'a [ScheduleEvent]) -> Self {
        Self { entries, schedules }
    }

    /// Entries dated exactly `date`.
    pub fn entries_for_date(&self, date: &str) -> Vec<&'a BudgetEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// Schedules whose inclusive `[start_date, end_date]` range contains
    /// `date`.
    pub fn schedules_for_date(&self, date: &str) -> Vec<&'a ScheduleEvent> {
        self.schedules
            .iter()
            .filter(|s| s.covers_date(date))
            .collect()
    }

    /// Schedules that start and end on the same day.
    pub fn single_day_schedules(&self) -> Vec<&'a ScheduleEvent> {
        self.schedules
            .iter()
            .filter(|s| s.is_single_day())
            .collect()
    }

    /// Schedules spanning more than one day, in original collection order.
    pub fn multi_day_schedules(&self) -> Vec<&'a ScheduleEvent> {
        self.schedules
            .iter()
            .filter(|s| !s.is_single_day())
            .collect()
    }
}
