//! Budget entry business logic.
//!
//! Validation and creation of dated income/expense entries, income/expense
//! totals, and date grouping for the list view. Creation-time validation is
//! the gate that keeps malformed dates out of the layout core, which relies
//! on canonical ISO strings for all its comparisons.

use shared::{
    parse_iso_date, BudgetEntry, BudgetSummary, CreateBudgetEntryRequest, EntryValidationError,
};
use uuid::Uuid;

/// Limits applied to budget entry input.
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    pub max_description_length: usize,
    pub max_amount: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_description_length: 256,
            max_amount: 1_000_000_000.0,
        }
    }
}

/// Budget service handling entry validation, creation, and aggregation.
#[derive(Debug, Clone, Default)]
pub struct BudgetService {
    config: BudgetConfig,
}

impl BudgetService {
    pub fn new() -> Self {
        Self {
            config: BudgetConfig::default(),
        }
    }

    pub fn with_config(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Validate a creation request. Empty result means valid.
    pub fn validate_entry(&self, request: &CreateBudgetEntryRequest) -> Vec<EntryValidationError> {
        let mut errors = Vec::new();

        let description = request.description.trim();
        if description.is_empty() {
            errors.push(EntryValidationError::EmptyDescription);
        } else if description.chars().count() > self.config.max_description_length {
            errors.push(EntryValidationError::DescriptionTooLong(
                description.chars().count(),
            ));
        }

        if !request.amount.is_finite() || request.amount == 0.0 {
            errors.push(EntryValidationError::InvalidAmount);
        } else if request.amount.abs() > self.config.max_amount {
            errors.push(EntryValidationError::AmountTooLarge(request.amount));
        }

        if parse_iso_date(&request.date).is_none() {
            errors.push(EntryValidationError::InvalidDate(request.date.clone()));
        }

        errors
    }

    /// Create an entry from a request, rejecting invalid input.
    pub fn create_entry(
        &self,
        request: &CreateBudgetEntryRequest,
    ) -> Result<BudgetEntry, Vec<EntryValidationError>> {
        let errors = self.validate_entry(request);
        if !errors.is_empty() {
            return Err(errors);
        }

        let entry = BudgetEntry {
            id: format!("entry::{}", Uuid::new_v4()),
            description: request.description.trim().to_string(),
            amount: request.amount,
            date: request.date.clone(),
            fixed_expense_id: request.fixed_expense_id.clone(),
        };
        log::info!(
            "created budget entry {} on {} for {}",
            entry.id,
            entry.date,
            entry.amount
        );
        Ok(entry)
    }

    /// Income/expense totals over a set of entries.
    pub fn summarize(&self, entries: &[BudgetEntry]) -> BudgetSummary {
        let total_income: f64 = entries.iter().filter(|e| e.amount > 0.0).map(|e| e.amount).sum();
        let total_expense: f64 = entries
            .iter()
            .filter(|e| e.amount < 0.0)
            .map(|e| e.amount.abs())
            .sum();

        BudgetSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Group entries by date for the list view, newest date first.
    ///
    /// Entries keep their original relative order within a date.
    pub fn group_by_date<'a>(
        &self,
        entries: &'a [BudgetEntry],
    ) -> Vec<(String, Vec<&'a BudgetEntry>)> {
        let mut groups: Vec<(String, Vec<&'a BudgetEntry>)> = Vec::new();
        for entry in entries {
            match groups.iter_mut().find(|(date, _)| *date == entry.date) {
                Some((_, group)) => group.push(entry),
                None => groups.push((entry.date.clone(), vec![entry])),
            }
        }
        groups.sort_by(|a, b| b.0.cmp(&a.0));
        groups
    }
}
