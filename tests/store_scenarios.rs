//! End-to-end behaviour of the store, filters and listeners through the
//! public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use expense_tracker::filter::{AmountFilter, CategoryFilter, TransactionFilter};
use expense_tracker::models::{Money, Transaction};
use expense_tracker::services::ExpenseController;
use expense_tracker::store::{StoreListener, TransactionStore};
use expense_tracker::ExpenseError;

/// Records how often it was told about a change and what it saw
#[derive(Default)]
struct Recorder {
    calls: Cell<usize>,
    seen_lengths: RefCell<Vec<usize>>,
}

impl StoreListener for Recorder {
    fn update(&self, store: &TransactionStore) -> anyhow::Result<()> {
        self.calls.set(self.calls.get() + 1);
        self.seen_lengths.borrow_mut().push(store.len());
        Ok(())
    }
}

struct Broken;

impl StoreListener for Broken {
    fn update(&self, _store: &TransactionStore) -> anyhow::Result<()> {
        anyhow::bail!("listener is broken")
    }
}

fn txn(cents: i64, category: &str) -> Transaction {
    Transaction::new(Money::from_cents(cents), category).unwrap()
}

#[test]
fn adding_one_transaction_notifies_every_listener_once() {
    let mut store = TransactionStore::new();
    let first = Rc::new(Recorder::default());
    let second = Rc::new(Recorder::default());
    store.register(first.clone());
    store.register(second.clone());

    store.add_transaction(txn(5000, "food")).unwrap();

    let transactions = store.transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount(), Money::from_cents(5000));
    assert_eq!(transactions[0].category(), "food");
    assert_eq!(first.calls.get(), 1);
    assert_eq!(second.calls.get(), 1);
    assert_eq!(*first.seen_lengths.borrow(), vec![1]);
}

#[test]
fn amount_and_category_filters_select_positions() {
    let mut store = TransactionStore::new();
    store.add_transaction(txn(1000, "food")).unwrap();
    store.add_transaction(txn(2000, "travel")).unwrap();
    store.add_transaction(txn(1000, "misc")).unwrap();

    let by_amount = AmountFilter::new(Money::from_cents(1000)).unwrap();
    let matched = by_amount.matched_indices(&store.transactions());
    assert_eq!(matched, vec![0, 2]);
    store.set_matched_filter_indices(&matched).unwrap();
    assert_eq!(store.matched_filter_indices(), vec![0, 2]);

    let by_category = CategoryFilter::new("travel").unwrap();
    let matched = by_category.matched_indices(&store.transactions());
    assert_eq!(matched, vec![1]);
}

#[test]
fn removing_the_first_transaction_keeps_the_second_and_clears_matches() {
    let mut store = TransactionStore::new();
    let first = txn(1000, "food");
    let second = txn(2000, "travel");
    store.add_transaction(first.clone()).unwrap();
    store.add_transaction(second.clone()).unwrap();
    store.set_matched_filter_indices(&[0, 1]).unwrap();

    assert!(store.remove_transaction(&first));

    assert_eq!(store.transactions(), vec![second]);
    assert!(store.matched_filter_indices().is_empty());
}

#[test]
fn out_of_range_matches_are_rejected_without_partial_update() {
    let mut store = TransactionStore::new();
    store.add_transaction(txn(1000, "food")).unwrap();
    store.add_transaction(txn(2000, "travel")).unwrap();
    store.set_matched_filter_indices(&[1]).unwrap();

    let err = store.set_matched_filter_indices(&[0, 5]).unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidArgument(_)));
    assert_eq!(store.matched_filter_indices(), vec![1]);
}

#[test]
fn invalid_filter_criteria_are_rejected() {
    let err = AmountFilter::from_f64(-3.0).unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidFilterCriterion(_)));

    let err = CategoryFilter::new("").unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidFilterCriterion(_)));

    let err = Transaction::new(Money::zero(), "food").unwrap_err();
    assert!(matches!(err, ExpenseError::InvalidTransaction(_)));
}

#[test]
fn removing_twice_only_notifies_once() {
    let mut store = TransactionStore::new();
    let recorder = Rc::new(Recorder::default());
    let transaction = txn(1000, "food");
    store.add_transaction(transaction.clone()).unwrap();
    store.register(recorder.clone());

    assert!(store.remove_transaction(&transaction));
    assert!(!store.remove_transaction(&transaction));
    assert_eq!(recorder.calls.get(), 1);
}

#[test]
fn registering_the_same_listener_twice_counts_once() {
    let mut store = TransactionStore::new();
    let recorder = Rc::new(Recorder::default());

    assert!(store.register(recorder.clone()));
    assert!(!store.register(recorder.clone()));
    assert_eq!(store.number_of_listeners(), 1);
    assert!(store.contains_listener(&recorder));
}

#[test]
fn a_failing_listener_does_not_block_later_ones() {
    let mut store = TransactionStore::new();
    let recorder = Rc::new(Recorder::default());
    store.register(Rc::new(Broken));
    store.register(recorder.clone());

    store.add_transaction(txn(1000, "food")).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(recorder.calls.get(), 1);
}

#[test]
fn controller_drives_the_whole_flow() {
    let mut store = TransactionStore::new();
    let recorder = Rc::new(Recorder::default());
    store.register(recorder.clone());

    let mut controller = ExpenseController::new(&mut store);
    assert!(controller.add_transaction("10", "food"));
    assert!(controller.add_transaction("20", "travel"));
    assert!(!controller.add_transaction("twenty", "travel"));

    controller.set_filter(Box::new(AmountFilter::parse("20").unwrap()));
    assert_eq!(controller.apply_filter().unwrap(), 1);
    assert!(controller.undo_transaction(Some(0)));

    assert_eq!(store.len(), 1);
    assert!(store.matched_filter_indices().is_empty());
    // two adds, one apply, one undo
    assert_eq!(recorder.calls.get(), 4);
}
