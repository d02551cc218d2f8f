//! Listener capability for store change notifications

use super::TransactionStore;

/// Something that wants to hear about every change to a [`TransactionStore`].
///
/// Listeners receive the whole store and re-read whatever they need through
/// its snapshot accessors. No diff is passed. The store is borrowed shared
/// for the duration of the call, so a listener cannot mutate it.
///
/// Returning an error does not stop the remaining listeners from being
/// notified; the store logs it and moves on.
pub trait StoreListener {
    fn update(&self, store: &TransactionStore) -> anyhow::Result<()>;
}
