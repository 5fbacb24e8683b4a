//! In-memory ledger: ordered records, balance, and exact-match search.

use serde::Serialize;

use crate::error::{Result, WalletError};
use crate::record::{Category, Record};

/// Totals over every record in a ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Balance {
    pub income: i64,
    pub expense: i64,
    /// `income - expense`
    pub net: i64,
}

/// Search criteria; every supplied criterion must match exactly.
///
/// Empty (or whitespace-only) criteria are treated as absent and match
/// every record.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
}

impl SearchQuery {
    /// Create an empty query that matches every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Match records whose `YYYY-MM-DD` date equals `date`.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = non_empty(date.into());
        self
    }

    /// Match records whose category label equals `category`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    /// Match records whose decimal amount equals `amount`.
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = non_empty(amount.into());
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.category.is_none() && self.amount.is_none()
    }

    /// Check a single record against every supplied criterion.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref date) = self.date {
            if record.date_string() != *date {
                return false;
            }
        }
        if let Some(ref category) = self.category {
            if record.category().label() != category {
                return false;
            }
        }
        if let Some(ref amount) = self.amount {
            if record.amount().to_string() != *amount {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Ordered collection of records for the running session.
///
/// Order is insertion order and must stay aligned with the stored block
/// order, because edits address records by index.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records already in stored order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record to the end of the ledger.
    pub fn add(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Replace the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::IndexOutOfRange` if `index >= len`; the ledger
    /// is left unchanged.
    pub fn edit(&mut self, index: usize, record: Record) -> Result<()> {
        let len = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(WalletError::IndexOutOfRange { index, len })?;
        *slot = record;
        Ok(())
    }

    /// Sum income and expense and compute the net.
    pub fn balance(&self) -> Balance {
        let mut balance = Balance::default();
        for record in &self.records {
            // Record::new caps amounts at i64::MAX.
            let amount = i64::try_from(record.amount()).unwrap_or(i64::MAX);
            match record.category() {
                Category::Income => balance.income = balance.income.saturating_add(amount),
                Category::Expense => balance.expense = balance.expense.saturating_add(amount),
            }
        }
        balance.net = balance.income.saturating_sub(balance.expense);
        balance
    }

    /// Return every record matching `query`, in ledger order.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }

    /// Like [`Ledger::search`], but keeps each record's ledger index.
    pub fn indexed_search(&self, query: &SearchQuery) -> Vec<(usize, &Record)> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| query.matches(record))
            .collect()
    }
}
