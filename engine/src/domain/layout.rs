//! The recompute-everything month layout entry point.
//!
//! One pure function assembles the whole month view value: grid geometry,
//! per-day cell contents, and packed bars for the multi-day schedules. It
//! is re-run in full on every input change (month navigation, collection
//! updates); nothing is cached between calls and the inputs are never
//! mutated.

use shared::{BudgetEntry, DayCell, MonthLayout, PresentationMode, ScheduleEvent};

use crate::domain::calendar::CalendarService;
use crate::domain::date_index::DateIndex;
use crate::domain::event_bars::pack_event_bars;

/// Compute the complete layout for one month view.
///
/// `month` is 0-based. Entries and schedules may contain items outside the
/// month; they simply land in no cell and no bar.
pub fn layout(
    year: i32,
    month: u32,
    entries: &[BudgetEntry],
    schedules: &[ScheduleEvent],
    mode: PresentationMode,
) -> MonthLayout {
    let grid = CalendarService::new().build_month(year, month);
    let index = DateIndex::new(entries, schedules);

    let days = (1..=grid.days_in_month)
        .map(|day| {
            let date = grid.date_of_day(day);
            let entries = index
                .entries_for_date(&date)
                .into_iter()
                .cloned()
                .collect();
            let single_day_schedules = index
                .schedules_for_date(&date)
                .into_iter()
                .filter(|s| s.is_single_day())
                .cloned()
                .collect();
            DayCell {
                day,
                date,
                entries,
                single_day_schedules,
            }
        })
        .collect();

    let bars = pack_event_bars(&index.multi_day_schedules(), &grid);

    log::debug!(
        "laid out {}/{}: {} entries, {} schedules, {} bars",
        year,
        month + 1,
        entries.len(),
        schedules.len(),
        bars.len()
    );

    MonthLayout {
        month: grid,
        days,
        bars,
        mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, date: &str, amount: f64) -> BudgetEntry {
        BudgetEntry {
            id: id.to_string(),
            description: format!("entry {id}"),
            amount,
            date: date.to_string(),
            fixed_expense_id: None,
        }
    }

    fn schedule(id: &str, start: &str, end: &str) -> ScheduleEvent {
        ScheduleEvent {
            id: id.to_string(),
            title: format!("schedule {id}"),
            description: None,
            start_date: start.to_string(),
            end_date: end.to_string(),
            is_all_day: true,
        }
    }

    #[test]
    fn test_layout_assembles_grid_cells_and_bars() {
        let entries = vec![
            entry("pay", "2024-04-01", 2400.0),
            entry("rent", "2024-04-01", -900.0),
            entry("groceries", "2024-04-15", -62.4),
        ];
        let schedules = vec![
            schedule("dinner", "2024-04-09", "2024-04-09"),
            schedule("trip", "2024-04-08", "2024-04-11"),
        ];

        let result = layout(2024, 3, &entries, &schedules, PresentationMode::Wide);

        assert_eq!(result.month.week_count, 5);
        assert_eq!(result.days.len(), 30);
        assert_eq!(result.mode, PresentationMode::Wide);

        let first = &result.days[0];
        assert_eq!(first.day, 1);
        assert_eq!(first.date, "2024-04-01");
        assert_eq!(first.entries.len(), 2);
        assert!(first.single_day_schedules.is_empty());

        // The single-day dinner appears as a chip on the 9th only
        let ninth = &result.days[8];
        assert_eq!(ninth.single_day_schedules.len(), 1);
        assert_eq!(ninth.single_day_schedules[0].id, "dinner");

        // The multi-day trip appears only as a bar, never as a chip
        assert!(result
            .days
            .iter()
            .all(|cell| cell.single_day_schedules.iter().all(|s| s.id != "trip")));
        assert_eq!(result.bars.len(), 1);
        assert_eq!(result.bars[0].schedule_id, "trip");
        assert_eq!(result.bars[0].start_column, 2);
        assert_eq!(result.bars[0].span, 4);
    }

    #[test]
    fn test_layout_single_day_schedule_never_in_bars() {
        let schedules = vec![schedule("s", "2024-04-01", "2024-04-01")];

        let result = layout(2024, 3, &[], &schedules, PresentationMode::Narrow);

        assert!(result.bars.is_empty());
        assert_eq!(result.days[0].single_day_schedules.len(), 1);
    }

    #[test]
    fn test_layout_ignores_items_outside_the_month() {
        let entries = vec![entry("march", "2024-03-31", -10.0)];
        let schedules = vec![schedule("may", "2024-05-01", "2024-05-04")];

        let result = layout(2024, 3, &entries, &schedules, PresentationMode::Wide);

        assert!(result.days.iter().all(|cell| cell.entries.is_empty()));
        assert!(result.bars.is_empty());
    }

    #[test]
    fn test_layout_of_empty_inputs() {
        let result = layout(2026, 1, &[], &[], PresentationMode::Narrow);

        assert_eq!(result.days.len(), 28);
        assert!(result.bars.is_empty());
        assert!(result.days.iter().all(|cell| {
            cell.entries.is_empty() && cell.single_day_schedules.is_empty()
        }));
    }
}
