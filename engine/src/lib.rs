//! Domain engine for the duo planner.
//!
//! Exposes the calendar month layout pipeline and the budget/schedule/fixed
//! expense business logic. Presentation, networking and persistence live in
//! other crates; everything here is synchronous and pure.

pub mod domain;

pub use domain::*;
