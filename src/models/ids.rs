//! Strongly-typed transaction identity
//!
//! A transaction is identified by a random UUID assigned at construction.
//! Removal and equality go through this id, so two entries with the same
//! amount and category stay distinct.

use std::fmt;
use uuid::Uuid;

/// Identity of a single recorded transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", &self.0.to_string()[..8])
    }
}
