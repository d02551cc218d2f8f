//! Transaction model
//!
//! A transaction records one expense: a strictly positive amount and a
//! category label. Transactions are immutable once built; the only way to
//! "change" one is to undo it and record a new one.

use chrono::{DateTime, Local};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// A recorded expense
#[derive(Debug, Clone)]
pub struct Transaction {
    id: TransactionId,
    amount: Money,
    category: String,
    created_at: DateTime<Local>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// Fails with [`ExpenseError::InvalidTransaction`] when the amount is not
    /// strictly positive or the category is blank. The category is stored
    /// with surrounding whitespace removed.
    pub fn new(amount: Money, category: impl Into<String>) -> ExpenseResult<Self> {
        if !amount.is_positive() {
            return Err(ExpenseError::InvalidTransaction(format!(
                "amount must be greater than zero, got {}",
                amount
            )));
        }

        let category = category.into();
        let category = category.trim();
        if category.is_empty() {
            return Err(ExpenseError::InvalidTransaction(
                "category must not be empty".into(),
            ));
        }

        Ok(Self {
            id: TransactionId::new(),
            amount,
            category: category.to_string(),
            created_at: Local::now(),
        })
    }

    /// Create a transaction from a floating point amount
    pub fn from_f64(amount: f64, category: impl Into<String>) -> ExpenseResult<Self> {
        let amount =
            Money::from_f64(amount).map_err(|e| ExpenseError::InvalidTransaction(e.to_string()))?;
        Self::new(amount, category)
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// When the transaction was recorded
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

/// Transactions are equal when they are the same recorded entry
impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Transaction {}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.created_at.format("%d-%m-%Y %H:%M"),
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(Money::from_cents(5000), "food").unwrap();
        assert_eq!(txn.amount(), Money::from_cents(5000));
        assert_eq!(txn.category(), "food");
    }

    #[test]
    fn test_category_is_trimmed() {
        let txn = Transaction::new(Money::from_cents(100), "  travel ").unwrap();
        assert_eq!(txn.category(), "travel");
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        for cents in [0, -1, -5000] {
            let result = Transaction::new(Money::from_cents(cents), "food");
            assert!(matches!(result, Err(ExpenseError::InvalidTransaction(_))));
        }
    }

    #[test]
    fn test_rejects_blank_category() {
        for category in ["", " ", "\t\n"] {
            let result = Transaction::new(Money::from_cents(100), category);
            assert!(matches!(result, Err(ExpenseError::InvalidTransaction(_))));
        }
    }

    #[test]
    fn test_from_f64() {
        let txn = Transaction::from_f64(50.0, "food").unwrap();
        assert_eq!(txn.amount().cents(), 5000);

        assert!(matches!(
            Transaction::from_f64(f64::NAN, "food"),
            Err(ExpenseError::InvalidTransaction(_))
        ));
        assert!(matches!(
            Transaction::from_f64(f64::INFINITY, "food"),
            Err(ExpenseError::InvalidTransaction(_))
        ));
        assert!(matches!(
            Transaction::from_f64(-3.0, "food"),
            Err(ExpenseError::InvalidTransaction(_))
        ));
        // Rounds to zero cents
        assert!(Transaction::from_f64(0.001, "food").is_err());
    }

    #[test]
    fn test_equality_is_by_identity() {
        let a = Transaction::new(Money::from_cents(1000), "food").unwrap();
        let b = Transaction::new(Money::from_cents(1000), "food").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(Money::from_cents(1250), "bills").unwrap();
        let shown = txn.to_string();
        assert!(shown.ends_with(" bills 12.50"));
    }
}
