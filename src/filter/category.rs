//! Filter on an exact category label.

use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::TransactionFilter;
use crate::models::Transaction;

/// Keeps transactions whose category equals the criterion.
///
/// The comparison is case-sensitive: `"Food"` does not match `"food"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    category: String,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// The criterion is trimmed the same way transaction categories are.
    ///
    /// # Errors
    /// [`ExpenseError::InvalidFilterCriterion`] if the category is blank.
    pub fn new(category: impl Into<String>) -> ExpenseResult<Self> {
        let category = category.into();
        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseError::InvalidFilterCriterion(
                "filter category must not be empty".into(),
            ));
        }
        Ok(Self {
            category: category.to_string(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl TransactionFilter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, transaction: &Transaction) -> bool {
        transaction.category() == self.category
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category = {:?}", self.category)
    }
}
