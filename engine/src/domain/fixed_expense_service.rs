//! Recurring fixed expense business logic.
//!
//! Fixed expenses (rent, subscriptions, insurance) are list data with a
//! frequency; they are never expanded into calendar occurrences. The
//! service validates input, projects the next payment date from the start
//! date, and converts everything to a monthly-equivalent total for the
//! overview header.

use chrono::{Days, Months, NaiveDate};
use shared::{
    format_iso_date, parse_iso_date, CreateFixedExpenseRequest, FixedExpense,
    FixedExpenseValidationError, Frequency,
};
use uuid::Uuid;

/// Limits applied to fixed expense input.
#[derive(Debug, Clone)]
pub struct FixedExpenseConfig {
    pub max_description_length: usize,
}

impl Default for FixedExpenseConfig {
    fn default() -> Self {
        Self {
            max_description_length: 256,
        }
    }
}

/// Fixed expense service handling validation, creation, and projections.
#[derive(Debug, Clone, Default)]
pub struct FixedExpenseService {
    config: FixedExpenseConfig,
}

impl FixedExpenseService {
    pub fn new() -> Self {
        Self {
            config: FixedExpenseConfig::default(),
        }
    }

    pub fn with_config(config: FixedExpenseConfig) -> Self {
        Self { config }
    }

    /// Validate a creation request. Empty result means valid.
    pub fn validate_fixed_expense(
        &self,
        request: &CreateFixedExpenseRequest,
    ) -> Vec<FixedExpenseValidationError> {
        let mut errors = Vec::new();

        let description = request.description.trim();
        if description.is_empty() {
            errors.push(FixedExpenseValidationError::EmptyDescription);
        } else if description.chars().count() > self.config.max_description_length {
            errors.push(FixedExpenseValidationError::DescriptionTooLong(
                description.chars().count(),
            ));
        }

        if !request.amount.is_finite() || request.amount <= 0.0 {
            errors.push(FixedExpenseValidationError::AmountNotPositive);
        }

        if parse_iso_date(&request.start_date).is_none() {
            errors.push(FixedExpenseValidationError::InvalidDate(
                request.start_date.clone(),
            ));
        }

        errors
    }

    /// Create a fixed expense from a request, rejecting invalid input.
    pub fn create_fixed_expense(
        &self,
        request: &CreateFixedExpenseRequest,
    ) -> Result<FixedExpense, Vec<FixedExpenseValidationError>> {
        let errors = self.validate_fixed_expense(request);
        if !errors.is_empty() {
            return Err(errors);
        }

        let expense = FixedExpense {
            id: format!("fixed::{}", Uuid::new_v4()),
            description: request.description.trim().to_string(),
            amount: request.amount,
            frequency: request.frequency,
            start_date: request.start_date.clone(),
        };
        log::info!(
            "created {} fixed expense {} starting {}",
            expense.frequency.label(),
            expense.id,
            expense.start_date
        );
        Ok(expense)
    }

    /// Next payment date on or after `today`, as a canonical ISO string.
    ///
    /// Steps the start date forward by the expense's frequency until it
    /// reaches `today`; a payment due today counts as the next one.
    /// Returns `None` if either date is malformed.
    pub fn next_payment_date(&self, expense: &FixedExpense, today: &str) -> Option<String> {
        let today = parse_iso_date(today)?;
        let mut next = parse_iso_date(&expense.start_date)?;
        while next < today {
            next = step(next, expense.frequency)?;
        }
        Some(format_iso_date(next))
    }

    /// Total monthly cost across expenses of mixed frequency.
    ///
    /// Weekly amounts count 52 weeks spread over 12 months, yearly amounts
    /// one twelfth each month.
    pub fn monthly_equivalent_total(&self, expenses: &[FixedExpense]) -> f64 {
        expenses
            .iter()
            .map(|e| match e.frequency {
                Frequency::Weekly => e.amount * 52.0 / 12.0,
                Frequency::Monthly => e.amount,
                Frequency::Yearly => e.amount / 12.0,
            })
            .sum()
    }
}

/// Advance a date by one occurrence of the frequency.
///
/// Month and year steps clamp to the end of a shorter target month, so a
/// payment anchored on the 31st lands on the 30th or 28th/29th when needed.
fn step(date: NaiveDate, frequency: Frequency) -> Option<NaiveDate> {
    match frequency {
        Frequency::Weekly => date.checked_add_days(Days::new(7)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
        Frequency::Yearly => date.checked_add_months(Months::new(12)),
    }
}
