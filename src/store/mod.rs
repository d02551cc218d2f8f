//! Observable transaction store
//!
//! [`TransactionStore`] owns the authoritative list of transactions and the
//! positions matched by the most recently applied filter. Every mutation
//! notifies the registered [`StoreListener`]s synchronously, in registration
//! order, after the mutation has fully applied.
//!
//! # Invariants
//!
//! 1. Every matched index is smaller than the number of transactions at the
//!    moment it is set.
//! 2. Adding or removing a transaction clears the matched indices before any
//!    listener runs, since positions shift.
//! 3. Accessors hand out copies; the internal sequences are never exposed.

pub mod listener;

pub use listener::StoreListener;

use std::rc::Rc;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Money, Transaction};

/// The single source of truth for recorded transactions
#[derive(Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    matched_indices: Vec<usize>,
    listeners: Vec<Rc<dyn StoreListener>>,
}

impl TransactionStore {
    /// Create an empty store with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction to the end of the sequence
    ///
    /// # Errors
    /// [`ExpenseError::InvalidArgument`] if this exact transaction (same id)
    /// is already stored. Nothing changes and no listener is notified.
    pub fn add_transaction(&mut self, transaction: Transaction) -> ExpenseResult<()> {
        if self.position_of(&transaction).is_some() {
            return Err(ExpenseError::InvalidArgument(format!(
                "transaction {} is already in the store",
                transaction.id()
            )));
        }

        tracing::debug!(
            id = %transaction.id(),
            amount = %transaction.amount(),
            category = transaction.category(),
            "Adding transaction"
        );

        self.transactions.push(transaction);
        self.matched_indices.clear();
        self.notify_listeners();
        Ok(())
    }

    /// Remove the given transaction if it is present
    ///
    /// Returns `false` without notifying anyone when the transaction is not
    /// in the store.
    pub fn remove_transaction(&mut self, transaction: &Transaction) -> bool {
        let Some(position) = self.position_of(transaction) else {
            tracing::debug!(id = %transaction.id(), "Transaction to remove not found");
            return false;
        };

        let removed = self.transactions.remove(position);
        tracing::debug!(id = %removed.id(), position, "Removed transaction");

        self.matched_indices.clear();
        self.notify_listeners();
        true
    }

    /// Snapshot of all transactions in insertion order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Copy of the transaction at `index`, if any
    pub fn get(&self, index: usize) -> Option<Transaction> {
        self.transactions.get(index).cloned()
    }

    /// Sum of every stored amount, saturating at the `Money` limits
    pub fn total(&self) -> Money {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    /// Replace the matched filter positions
    ///
    /// Every index is checked against the current number of transactions
    /// before anything is assigned. Repeated positions are collapsed, keeping
    /// the first occurrence.
    ///
    /// # Errors
    /// [`ExpenseError::InvalidArgument`] naming the first out-of-range index.
    /// The previous matched positions are left untouched.
    pub fn set_matched_filter_indices(&mut self, indices: &[usize]) -> ExpenseResult<()> {
        let len = self.transactions.len();
        if let Some(bad) = indices.iter().find(|&&index| index >= len) {
            return Err(ExpenseError::InvalidArgument(format!(
                "matched index {} is outside 0..{}",
                bad, len
            )));
        }

        let mut matched = Vec::with_capacity(indices.len());
        for &index in indices {
            if !matched.contains(&index) {
                matched.push(index);
            }
        }

        tracing::debug!(count = matched.len(), "Setting matched filter indices");
        self.matched_indices = matched;
        self.notify_listeners();
        Ok(())
    }

    /// Copy of the matched filter positions
    pub fn matched_filter_indices(&self) -> Vec<usize> {
        self.matched_indices.clone()
    }

    /// Register a listener for change notifications
    ///
    /// Returns `false` if this listener (by pointer identity) is already
    /// registered.
    pub fn register(&mut self, listener: Rc<dyn StoreListener>) -> bool {
        if self.contains_listener(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Stop notifying a listener. Returns `false` if it was not registered.
    pub fn unregister<L: StoreListener + ?Sized>(&mut self, listener: &Rc<L>) -> bool {
        let before = self.listeners.len();
        self.listeners
            .retain(|registered| !same_listener(registered, listener));
        self.listeners.len() != before
    }

    pub fn number_of_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Whether this listener (by pointer identity) is registered
    pub fn contains_listener<L: StoreListener + ?Sized>(&self, listener: &Rc<L>) -> bool {
        self.listeners
            .iter()
            .any(|registered| same_listener(registered, listener))
    }

    fn position_of(&self, transaction: &Transaction) -> Option<usize> {
        self.transactions
            .iter()
            .position(|stored| stored.id() == transaction.id())
    }

    fn notify_listeners(&self) {
        for (index, listener) in self.listeners.iter().enumerate() {
            if let Err(err) = listener.update(self) {
                tracing::warn!(listener = index, error = %err, "Store listener failed");
            }
        }
    }
}

impl std::fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("matched_indices", &self.matched_indices)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn same_listener<L: StoreListener + ?Sized>(
    registered: &Rc<dyn StoreListener>,
    candidate: &Rc<L>,
) -> bool {
    std::ptr::eq(
        Rc::as_ptr(registered).cast::<()>(),
        Rc::as_ptr(candidate).cast::<()>(),
    )
}
