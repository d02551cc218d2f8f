//! Service layer for the expense tracker
//!
//! The service layer provides the input-handling logic on top of the store:
//! validation of raw text, filter application and undo.

pub mod controller;

pub use controller::{CategoryPolicy, ExpenseController};
