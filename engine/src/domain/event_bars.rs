//! Bar segments and lane packing for multi-day schedules.
//!
//! Each multi-day schedule is clamped to the displayed month and cut into
//! one horizontal bar per week row it overlaps. Bars in the same week row
//! are then stacked: sort by `(start_column asc, span desc)` with the
//! schedules' original relative order breaking ties, and assign each bar
//! its position in that order as `row_offset`.
//!
//! The stacking is a greedy approximation. It guarantees that no two bars
//! with overlapping columns share a row, not that the row count is minimal;
//! the sort and tie-break order is what keeps bars visually stable across
//! recomputes, so it must not be changed.

use std::collections::BTreeMap;

use shared::{CalendarMonth, EventBar, ScheduleEvent};

/// Compute bar segments for the multi-day schedules overlapping a month.
///
/// Single-day schedules never produce a bar; they are rendered as in-cell
/// chips by the per-day classification instead. Schedules are assumed to
/// satisfy `start_date <= end_date` (enforced at creation time); an
/// inverted or malformed range contributes nothing.
pub fn pack_event_bars(schedules: &[&ScheduleEvent], grid: &CalendarMonth) -> Vec<EventBar> {
    let month_first = grid.first_date();
    let month_last = grid.last_date();
    let mut bars = Vec::new();

    for schedule in schedules {
        if schedule.is_single_day() {
            continue;
        }
        if schedule.end_date < month_first || schedule.start_date > month_last {
            continue;
        }

        // Clamp the inclusive date range to this month's days.
        let start_day = if schedule.start_date <= month_first {
            Some(1)
        } else {
            day_component(&schedule.start_date)
        };
        let end_day = if schedule.end_date >= month_last {
            Some(grid.days_in_month)
        } else {
            day_component(&schedule.end_date)
        };
        let (Some(start_day), Some(end_day)) = (start_day, end_day) else {
            log::debug!("skipping schedule {} with unparseable dates", schedule.id);
            continue;
        };
        if start_day > end_day {
            continue;
        }

        for week in grid.week_of_day(start_day)..=grid.week_of_day(end_day) {
            let (week_first, week_last) = grid.week_day_span(week);
            let segment_start = start_day.max(week_first);
            let segment_end = end_day.min(week_last);
            let start_column = grid.column_of_day(segment_start);
            let span = grid.column_of_day(segment_end) - start_column + 1;

            bars.push(EventBar {
                schedule_id: schedule.id.clone(),
                week_index: week,
                start_column,
                span,
                row_offset: 0,
            });
        }
    }

    assign_row_offsets(&mut bars);

    log::debug!(
        "packed {} bars for {} schedules in {}/{}",
        bars.len(),
        schedules.len(),
        grid.year,
        grid.month + 1
    );
    bars
}

/// Day-of-month component of a canonical ISO date within the grid's month.
fn day_component(date: &str) -> Option<u32> {
    date.get(8..10)?.parse().ok()
}

/// Stack each week row's bars so none of them collide.
///
/// `row_offset` is the bar's position in the `(start_column asc, span desc)`
/// order of its week row. The sort is stable, so bars that tie keep the
/// original schedule order - an explicit policy, not an accident.
fn assign_row_offsets(bars: &mut [EventBar]) {
    let mut weeks: BTreeMap<u32, Vec<usize>> = BTreeMap::new();
    for (index, bar) in bars.iter().enumerate() {
        weeks.entry(bar.week_index).or_default().push(index);
    }

    for indices in weeks.values() {
        let mut order = indices.clone();
        order.sort_by(|&a, &b| {
            bars[a]
                .start_column
                .cmp(&bars[b].start_column)
                .then_with(|| bars[b].span.cmp(&bars[a].span))
        });
        for (offset, &index) in order.iter().enumerate() {
            bars[index].row_offset = offset as u32;
        }
    }
}
