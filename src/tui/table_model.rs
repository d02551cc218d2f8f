//! Table model backing the transaction table
//!
//! Registered with the store as a listener. On every change it re-reads the
//! store's snapshots and rebuilds the rows the table view draws, so rendering
//! never touches the store directly.

use std::cell::{Cell, RefCell};

use crate::models::{Money, TransactionId};
use crate::store::{StoreListener, TransactionStore};

/// One displayed row, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: TransactionId,
    pub serial: usize,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub highlighted: bool,
}

/// Cached view of the store for the transaction table
#[derive(Debug, Default)]
pub struct TableModel {
    rows: RefCell<Vec<TableRow>>,
    total: Cell<Money>,
    matched: Cell<usize>,
    revision: Cell<u64>,
}

impl TableModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the cache from the store
    pub fn refresh(&self, store: &TransactionStore) {
        let matched = store.matched_filter_indices();
        let rows = store
            .transactions()
            .iter()
            .enumerate()
            .map(|(index, txn)| TableRow {
                id: txn.id(),
                serial: index + 1,
                amount: txn.amount().to_string(),
                category: txn.category().to_string(),
                date: txn.created_at().format("%d-%m-%Y %H:%M").to_string(),
                highlighted: matched.contains(&index),
            })
            .collect();

        *self.rows.borrow_mut() = rows;
        self.total.set(store.total());
        self.matched.set(matched.len());
        self.revision.set(self.revision.get() + 1);
    }

    /// Copy of the current rows
    pub fn rows(&self) -> Vec<TableRow> {
        self.rows.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Sum of all amounts at the last refresh
    pub fn total(&self) -> Money {
        self.total.get()
    }

    /// How many rows are highlighted
    pub fn matched_count(&self) -> usize {
        self.matched.get()
    }

    /// Number of refreshes so far
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }
}

impl StoreListener for TableModel {
    fn update(&self, store: &TransactionStore) -> anyhow::Result<()> {
        self.refresh(store);
        Ok(())
    }
}
