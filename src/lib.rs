//! Expense Tracker - observable expense store with a terminal form
//!
//! This library records expense transactions in an in-memory store that
//! notifies registered listeners on every change, computes which
//! transactions match an amount or category filter, and supports undoing a
//! single transaction.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Money, transaction ids and transactions
//! - `filter`: Amount and category filters
//! - `store`: The observable transaction store and its listener trait
//! - `services`: The controller that turns form input into store calls
//! - `tui`: The interactive terminal form
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::filter::{CategoryFilter, TransactionFilter};
//! use expense_tracker::models::{Money, Transaction};
//! use expense_tracker::store::TransactionStore;
//!
//! let mut store = TransactionStore::new();
//! store.add_transaction(Transaction::new(Money::from_cents(1250), "food")?)?;
//! store.add_transaction(Transaction::new(Money::from_cents(400), "travel")?)?;
//!
//! let filter = CategoryFilter::new("travel")?;
//! let matched = filter.matched_indices(&store.transactions());
//! store.set_matched_filter_indices(&matched)?;
//! assert_eq!(store.matched_filter_indices(), vec![1]);
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;
pub mod tui;

pub use error::{ExpenseError, ExpenseResult};
