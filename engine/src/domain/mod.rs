//! # Domain Module
//!
//! Business logic for the duo planner: a shared calendar of dated
//! income/expense entries, recurring fixed expenses, and date-ranged
//! schedule events for two people.
//!
//! ## Module Organization
//!
//! - **calendar**: Month grid geometry and month navigation
//! - **date_index**: Per-date classification of entries and schedules
//! - **event_bars**: Week-row bar segments and lane packing for multi-day
//!   schedules
//! - **layout**: The single recompute-everything month layout entry point
//! - **interaction**: Add/edit flow state machine driven by day-cell clicks
//! - **budget_service**: Budget entry validation, creation, totals, and
//!   list grouping
//! - **schedule_service**: Schedule validation (including date ordering)
//!   and creation
//! - **fixed_expense_service**: Recurring fixed expense validation, next
//!   payment dates, and monthly totals
//!
//! ## Design Principles
//!
//! - Every layout computation is a pure function of its inputs, re-run in
//!   full on each change; nothing is cached or mutated in place.
//! - Collections are owned by the caller and borrowed here.
//! - Date strings are canonical zero-padded ISO (`YYYY-MM-DD`) so that
//!   lexicographic order is calendar order; the creation services are the
//!   gate that keeps malformed dates and inverted ranges out of the core.

pub mod budget_service;
pub mod calendar;
pub mod date_index;
pub mod event_bars;
pub mod fixed_expense_service;
pub mod interaction;
pub mod layout;
pub mod schedule_service;

pub use budget_service::*;
pub use calendar::*;
pub use date_index::*;
pub use event_bars::*;
pub use fixed_expense_service::*;
pub use interaction::*;
pub use layout::*;
pub use schedule_service::*;
