//! Transaction filters
//!
//! A filter is a pure predicate over a single transaction. The controller
//! holds one as `Box<dyn TransactionFilter>` and uses it to compute which
//! rows of the table should be highlighted.

pub mod amount;
pub mod category;

pub use amount::AmountFilter;
pub use category::CategoryFilter;

use crate::models::Transaction;

/// Core trait for matching transactions.
///
/// Implementers validate their criterion at construction, so a filter that
/// exists is always usable.
pub trait TransactionFilter: std::fmt::Display {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the transaction satisfies this filter's criterion
    fn matches(&self, transaction: &Transaction) -> bool;

    /// Positions of every matching transaction, in ascending order
    fn matched_indices(&self, transactions: &[Transaction]) -> Vec<usize> {
        transactions
            .iter()
            .enumerate()
            .filter(|(_, txn)| self.matches(txn))
            .map(|(index, _)| index)
            .collect()
    }
}
