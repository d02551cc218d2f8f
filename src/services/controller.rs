//! Expense controller
//!
//! Sits between the form and the store: turns raw text from the inputs into
//! transactions and filters, applies the current filter, and maps a selected
//! table row back to the transaction to undo.

use crate::error::{ExpenseError, ExpenseResult};
use crate::filter::TransactionFilter;
use crate::models::{Money, Transaction};
use crate::store::TransactionStore;

/// Which category labels the controller accepts for new transactions
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Any non-blank label
    #[default]
    Any,
    /// Only labels from this list (exact, case-sensitive)
    OneOf(Vec<String>),
}

impl CategoryPolicy {
    /// Check a category against the policy
    pub fn check(&self, category: &str) -> ExpenseResult<()> {
        match self {
            Self::Any => Ok(()),
            Self::OneOf(allowed) => {
                let category = category.trim();
                if allowed.iter().any(|c| c == category) {
                    Ok(())
                } else {
                    Err(ExpenseError::InvalidTransaction(format!(
                        "category '{}' is not one of: {}",
                        category,
                        allowed.join(", ")
                    )))
                }
            }
        }
    }
}

/// Coordinates form input with the transaction store
pub struct ExpenseController<'a> {
    store: &'a mut TransactionStore,
    filter: Option<Box<dyn TransactionFilter>>,
    categories: CategoryPolicy,
}

impl<'a> ExpenseController<'a> {
    /// Create a controller over an existing store
    pub fn new(store: &'a mut TransactionStore) -> Self {
        Self {
            store,
            filter: None,
            categories: CategoryPolicy::default(),
        }
    }

    /// Restrict which categories new transactions may use
    pub fn with_category_policy(mut self, categories: CategoryPolicy) -> Self {
        self.categories = categories;
        self
    }

    pub fn store(&self) -> &TransactionStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut TransactionStore {
        &mut *self.store
    }

    /// Record a transaction from raw input, reporting only success
    pub fn add_transaction(&mut self, amount: &str, category: &str) -> bool {
        match self.try_add_transaction(amount, category) {
            Ok(_) => true,
            Err(err) => {
                tracing::info!(error = %err, "Rejected transaction input");
                false
            }
        }
    }

    /// Record a transaction from raw input
    ///
    /// # Errors
    /// [`ExpenseError::InvalidTransaction`] when the amount does not parse, is
    /// not positive, or the category is blank or rejected by the policy.
    pub fn try_add_transaction(
        &mut self,
        amount: &str,
        category: &str,
    ) -> ExpenseResult<Transaction> {
        let amount =
            Money::parse(amount).map_err(|e| ExpenseError::InvalidTransaction(e.to_string()))?;
        let transaction = Transaction::new(amount, category)?;
        self.categories.check(transaction.category())?;

        self.store.add_transaction(transaction.clone())?;
        Ok(transaction)
    }

    /// Replace the current filter. Nothing is highlighted until
    /// [`apply_filter`](Self::apply_filter) runs.
    pub fn set_filter(&mut self, filter: Box<dyn TransactionFilter>) {
        tracing::debug!(filter = filter.name(), criterion = %filter, "Filter set");
        self.filter = Some(filter);
    }

    pub fn filter(&self) -> Option<&dyn TransactionFilter> {
        self.filter.as_deref()
    }

    /// Drop the current filter and clear any highlighted matches
    pub fn clear_filter(&mut self) -> ExpenseResult<()> {
        self.filter = None;
        self.store.set_matched_filter_indices(&[])
    }

    /// Compute the current filter's matches and hand them to the store
    ///
    /// With no filter set the match set becomes empty. Returns how many
    /// transactions matched.
    pub fn apply_filter(&mut self) -> ExpenseResult<usize> {
        let matched = match &self.filter {
            Some(filter) => filter.matched_indices(&self.store.transactions()),
            None => Vec::new(),
        };

        self.store.set_matched_filter_indices(&matched)?;
        tracing::info!(matches = matched.len(), "Applied filter");
        Ok(matched.len())
    }

    /// Undo the transaction shown at `row`
    ///
    /// Returns `false` when nothing is selected or the row does not exist.
    pub fn undo_transaction(&mut self, row: Option<usize>) -> bool {
        let Some(row) = row else {
            return false;
        };
        let Some(transaction) = self.store.get(row) else {
            tracing::info!(row, "Undo requested for a row that does not exist");
            return false;
        };

        self.store.remove_transaction(&transaction)
    }
}
