//! Core data models for the expense tracker
//!
//! This module contains the value types the store and filters work on:
//! money amounts, transaction identities and transactions.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;
