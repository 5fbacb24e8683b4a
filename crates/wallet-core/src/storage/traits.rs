//! Storage trait definition.
//!
//! The `RecordStore` trait is the seam between the in-memory [`Ledger`]
//! and whatever keeps records between sessions. Implementations keep stored
//! order identical to ledger order, since records are addressed by index.
//!
//! [`Ledger`]: crate::ledger::Ledger

use crate::error::Result;
use crate::record::Record;

/// Persistent, index-ordered record storage.
pub trait RecordStore {
    /// Load every stored record in stored order.
    ///
    /// A store that has never been written loads as empty.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Parse` if stored data is malformed, or
    /// `WalletError::Storage` if it cannot be read.
    fn load(&self) -> Result<Vec<Record>>;

    /// Add one record after all existing ones without rewriting them.
    fn append(&mut self, record: &Record) -> Result<()>;

    /// Replace the stored contents with `records`, in order.
    fn rewrite_all(&mut self, records: &[Record]) -> Result<()>;

    /// Replace the record at `index`, leaving every other record untouched.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::IndexOutOfRange` if no record is stored at
    /// `index`; the store is left unchanged.
    fn replace_at(&mut self, index: usize, record: &Record) -> Result<()>;
}
