use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parse a calendar date in strict `YYYY-MM-DD` form.
///
/// Returns `None` unless the string is zero-padded canonical ISO. All date
/// comparisons in the planner are lexicographic, which is only sound for
/// canonical strings, so anything looser is rejected at the boundary.
pub fn parse_iso_date(date: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    if format_iso_date(parsed) == date {
        Some(parsed)
    } else {
        None
    }
}

/// Format a date as canonical `YYYY-MM-DD`.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A single dated income or expense record.
///
/// Positive amounts are income, negative amounts are expense. The date is a
/// canonical ISO string; entries are always single-day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: String,
    /// Description of the entry (max length enforced at creation)
    pub description: String,
    /// Signed amount (positive for income, negative for expense)
    pub amount: f64,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Fixed expense this entry was recorded against, if any
    pub fixed_expense_id: Option<String>,
}

/// Request to create a budget entry, validated by the budget service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBudgetEntryRequest {
    pub description: String,
    pub amount: f64,
    pub date: String,
    pub fixed_expense_id: Option<String>,
}

/// Validation failures for budget entry creation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description is {0} characters, over the limit")]
    DescriptionTooLong(usize),
    #[error("amount must be a finite non-zero number")]
    InvalidAmount,
    #[error("amount {0} exceeds the configured maximum")]
    AmountTooLarge(f64),
    #[error("`{0}` is not a canonical YYYY-MM-DD date")]
    InvalidDate(String),
}

/// A schedule event covering an inclusive date range.
///
/// Single-day events have `start_date == end_date`. The range invariant
/// `start_date <= end_date` is enforced by the schedule service at creation
/// time; the layout engine assumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// First day of the event, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of the event (inclusive), `YYYY-MM-DD`
    pub end_date: String,
    /// Whether the event has no specific time of day
    pub is_all_day: bool,
}

impl ScheduleEvent {
    /// Whether the event starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// Whether the given date falls within the event's inclusive range.
    ///
    /// Lexicographic comparison, valid because all dates are canonical
    /// zero-padded ISO strings.
    pub fn covers_date(&self, date: &str) -> bool {
        self.start_date.as_str() <= date && date <= self.end_date.as_str()
    }
}

/// Request to create a schedule event, validated by the schedule service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_all_day: bool,
}

/// Validation failures for schedule creation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("title is {0} characters, over the limit")]
    TitleTooLong(usize),
    #[error("`{0}` is not a canonical YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: String, end: String },
}

/// How often a fixed expense recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

/// A recurring fixed expense (rent, subscriptions, insurance).
///
/// Fixed expenses are list data only; they are never expanded onto the
/// month calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: String,
    pub description: String,
    /// Expense amount per occurrence, always positive
    pub amount: f64,
    pub frequency: Frequency,
    /// First payment date, `YYYY-MM-DD`
    pub start_date: String,
}

/// Request to create a fixed expense, validated by the fixed expense service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFixedExpenseRequest {
    pub description: String,
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: String,
}

/// Validation failures for fixed expense creation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FixedExpenseValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("description is {0} characters, over the limit")]
    DescriptionTooLong(usize),
    #[error("amount must be a positive finite number")]
    AmountNotPositive,
    #[error("`{0}` is not a canonical YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Income/expense totals over a set of budget entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Sum of all positive amounts
    pub total_income: f64,
    /// Sum of the absolute values of all negative amounts
    pub total_expense: f64,
    /// `total_income - total_expense`
    pub balance: f64,
}

/// Viewport class supplied by the presentation layer.
///
/// An explicit input rather than a runtime viewport probe so layout and
/// interaction behavior stay deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    Wide,
    Narrow,
}

/// Grid geometry of one calendar month.
///
/// The grid is Sunday-first: week row 0 starts with `starting_weekday`
/// padding cells before day 1. Derived, immutable, recomputed per month
/// change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// 0-based month (0 = January .. 11 = December)
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of day 1 (0 = Sunday .. 6 = Saturday)
    pub starting_weekday: u32,
    /// Number of week rows: `ceil((starting_weekday + days_in_month) / 7)`
    pub week_count: u32,
}

impl CalendarMonth {
    /// 1-indexed grid column (1 = Sunday .. 7 = Saturday) of a day of the
    /// month.
    pub fn column_of_day(&self, day: u32) -> u32 {
        (self.starting_weekday + day - 1) % 7 + 1
    }

    /// 0-indexed week row containing a day of the month.
    pub fn week_of_day(&self, day: u32) -> u32 {
        (self.starting_weekday + day - 1) / 7
    }

    /// First and last day numbers belonging to a week row, clamped to the
    /// month's day range for partial first/last weeks.
    pub fn week_day_span(&self, week: u32) -> (u32, u32) {
        let row_start = 7 * week as i64 + 1 - self.starting_weekday as i64;
        let first = row_start.max(1) as u32;
        let last = (row_start + 6).min(self.days_in_month as i64) as u32;
        (first, last)
    }

    /// Canonical ISO date of a day of the month.
    pub fn date_of_day(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, day)
    }

    /// ISO date of the first day of the month.
    pub fn first_date(&self) -> String {
        self.date_of_day(1)
    }

    /// ISO date of the last day of the month.
    pub fn last_date(&self) -> String {
        self.date_of_day(self.days_in_month)
    }
}

/// One visible segment of a multi-day schedule within one week row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBar {
    pub schedule_id: String,
    /// Week row this segment belongs to (0-indexed)
    pub week_index: u32,
    /// First grid column covered (1..7)
    pub start_column: u32,
    /// Number of columns covered; `start_column + span - 1 <= 7`
    pub span: u32,
    /// Vertical stacking row within the week (0 = topmost)
    pub row_offset: u32,
}

impl EventBar {
    /// Last grid column covered by this segment.
    pub fn end_column(&self) -> u32 {
        self.start_column + self.span - 1
    }

    /// Whether two bars cover at least one common column.
    pub fn columns_overlap(&self, other: &EventBar) -> bool {
        self.start_column <= other.end_column() && other.start_column <= self.end_column()
    }
}

/// Per-day classification of the items visible in one day cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    /// Day of the month (1-based)
    pub day: u32,
    /// Canonical ISO date of this cell
    pub date: String,
    pub entries: Vec<BudgetEntry>,
    /// Schedules rendered as chips inside the cell; multi-day schedules are
    /// rendered as bars instead and never appear here
    pub single_day_schedules: Vec<ScheduleEvent>,
}

/// Complete derived layout for one month view.
///
/// A value object recomputed from scratch on every input change and
/// discarded after the presentation layer consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLayout {
    pub month: CalendarMonth,
    /// One cell per day of the month, in day order
    pub days: Vec<DayCell>,
    /// Bar segments for all multi-day schedules overlapping the month
    pub bars: Vec<EventBar>,
    /// Viewport class the layout was computed for
    pub mode: PresentationMode,
}
