//! Ledger records and their field parsers.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WalletError};

/// ISO-8601 calendar date format used for input, storage, and search.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a record adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// The fixed label written to disk and matched by search.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Income => "Income",
            Category::Expense => "Expense",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = WalletError;

    /// Accepts either label in any capitalization ("income", "EXPENSE").
    fn from_str(value: &str) -> Result<Self> {
        match normalize_label(value).as_str() {
            "Income" => Ok(Category::Income),
            "Expense" => Ok(Category::Expense),
            _ => Err(WalletError::Validation(
                "Category must be Income or Expense.".to_string(),
            )),
        }
    }
}

/// Capitalize the first letter and lowercase the rest.
///
/// Search criteria go through this too, so "income" finds `Income` records.
pub fn normalize_label(value: &str) -> String {
    let mut chars = value.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
///
/// Only the canonical ten-character form is accepted; chrono alone would
/// also take `2024-4-1` or a signed year.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let invalid = || {
        WalletError::Validation(format!(
            "Invalid date (expected YYYY-MM-DD): {}",
            trimmed
        ))
    };
    if !is_canonical_date(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

fn is_canonical_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, byte)| match i {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Parse a strictly positive integer amount.
pub fn parse_amount(value: &str) -> Result<u64> {
    let trimmed = value.trim();
    let amount: i128 = trimmed.parse().map_err(|_| {
        WalletError::Validation(format!("Amount must be a whole number: {}", trimmed))
    })?;
    if amount <= 0 {
        return Err(WalletError::Validation(
            "Amount must be positive.".to_string(),
        ));
    }
    u64::try_from(amount)
        .map_err(|_| WalletError::Validation(format!("Amount is too large: {}", trimmed)))
}

/// One dated income or expense entry.
///
/// Records are never mutated after construction; an edit replaces the
/// record at its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct Record {
    date: NaiveDate,
    category: Category,
    amount: u64,
    description: String,
}

impl Record {
    /// Build a record from typed fields.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Validation` if the amount is zero or does not fit
    /// a signed total, or if the description spans more than one line.
    pub fn new(
        date: NaiveDate,
        category: Category,
        amount: u64,
        description: impl Into<String>,
    ) -> Result<Self> {
        if amount == 0 {
            return Err(WalletError::Validation(
                "Amount must be positive.".to_string(),
            ));
        }
        if i64::try_from(amount).is_err() {
            return Err(WalletError::Validation(format!(
                "Amount is too large: {}",
                amount
            )));
        }
        let description = description.into();
        if description.contains(['\n', '\r']) {
            return Err(WalletError::Validation(
                "Description must be a single line.".to_string(),
            ));
        }
        Ok(Self {
            date,
            category,
            amount,
            description,
        })
    }

    /// Validate raw text fields and build a record.
    ///
    /// Checks run in prompt order (date, category, amount) and the first
    /// failure is returned.
    pub fn parse(date: &str, category: &str, amount: &str, description: &str) -> Result<Self> {
        let date = parse_date(date)?;
        let category = category.parse::<Category>()?;
        let amount = parse_amount(amount)?;
        Self::new(date, category, amount, description)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The date in the stored `YYYY-MM-DD` form.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Unchecked field set that deserialization goes through, so serialized
/// input is held to the same rules as [`Record::new`].
#[derive(Deserialize)]
struct RawRecord {
    date: NaiveDate,
    category: Category,
    amount: u64,
    description: String,
}

impl TryFrom<RawRecord> for Record {
    type Error = WalletError;

    fn try_from(raw: RawRecord) -> Result<Self> {
        Record::new(raw.date, raw.category, raw.amount, raw.description)
    }
}
