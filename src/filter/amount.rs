//! Filter on an exact transaction amount.

use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::TransactionFilter;
use crate::models::{Money, Transaction};

/// Keeps transactions whose amount equals the criterion to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountFilter {
    amount: Money,
}

impl AmountFilter {
    /// Create a new AmountFilter.
    ///
    /// # Errors
    /// [`ExpenseError::InvalidFilterCriterion`] if `amount` is zero or negative.
    pub fn new(amount: Money) -> ExpenseResult<Self> {
        if !amount.is_positive() {
            return Err(ExpenseError::InvalidFilterCriterion(format!(
                "filter amount must be greater than zero, got {}",
                amount
            )));
        }
        Ok(Self { amount })
    }

    pub fn from_f64(amount: f64) -> ExpenseResult<Self> {
        let amount = Money::from_f64(amount)
            .map_err(|e| ExpenseError::InvalidFilterCriterion(e.to_string()))?;
        Self::new(amount)
    }

    /// Build a filter from raw text typed into the form.
    pub fn parse(input: &str) -> ExpenseResult<Self> {
        let amount =
            Money::parse(input).map_err(|e| ExpenseError::InvalidFilterCriterion(e.to_string()))?;
        Self::new(amount)
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

impl TransactionFilter for AmountFilter {
    fn name(&self) -> &str {
        "AmountFilter"
    }

    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.amount() == self.amount
    }
}

impl fmt::Display for AmountFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "amount = {}", self.amount)
    }
}
