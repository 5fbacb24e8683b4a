//! The five-line text block each record is stored as.
//!
//! ```text
//! Date: 2024-04-10
//! Category: Income
//! Amount: 50000
//! Description: Salary
//!
//! ```
//!
//! Every block is exactly [`LINES_PER_BLOCK`] lines, so record `i` lives on
//! lines `i * 5 .. i * 5 + 5` of the file.

use crate::error::{Result, WalletError};
use crate::record::{parse_amount, parse_date, Category, Record};

/// Lines occupied by one stored record, including its blank terminator.
pub const LINES_PER_BLOCK: usize = 5;

const DATE_LABEL: &str = "Date:";
const CATEGORY_LABEL: &str = "Category:";
const AMOUNT_LABEL: &str = "Amount:";
const DESCRIPTION_LABEL: &str = "Description:";

/// Render one record as a complete block, terminator line included.
pub fn encode_block(record: &Record) -> String {
    format!(
        "{} {}\n{} {}\n{} {}\n{} {}\n\n",
        DATE_LABEL,
        record.date_string(),
        CATEGORY_LABEL,
        record.category(),
        AMOUNT_LABEL,
        record.amount(),
        DESCRIPTION_LABEL,
        record.description()
    )
}

/// Render records back to back, with no leading blank line.
pub fn encode_blocks(records: &[Record]) -> String {
    records.iter().map(encode_block).collect()
}

/// Parse a whole file's worth of blocks.
pub fn decode_blocks(text: &str) -> Result<Vec<Record>> {
    let mut parser = BlockParser::new();
    for line in text.lines() {
        parser.feed(line)?;
    }
    parser.finish()
}

/// What the parser expects on the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Date,
    Category,
    Amount,
    Description,
    Terminator,
}

impl Expect {
    fn label(self) -> &'static str {
        match self {
            Expect::Date => DATE_LABEL,
            Expect::Category => CATEGORY_LABEL,
            Expect::Amount => AMOUNT_LABEL,
            Expect::Description => DESCRIPTION_LABEL,
            Expect::Terminator => "a blank line",
        }
    }
}

/// Line-at-a-time block reader.
///
/// Fields accumulate in a pending slot that is emptied each time a record
/// is emitted, so nothing leaks from one block into the next.
#[derive(Debug)]
pub struct BlockParser {
    line: usize,
    expect: Expect,
    date: Option<chrono::NaiveDate>,
    category: Option<Category>,
    amount: Option<u64>,
    records: Vec<Record>,
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockParser {
    pub fn new() -> Self {
        Self {
            line: 0,
            expect: Expect::Date,
            date: None,
            category: None,
            amount: None,
            records: Vec::new(),
        }
    }

    /// Consume the next line of the file (without its line ending).
    pub fn feed(&mut self, raw: &str) -> Result<()> {
        self.line += 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            return match self.expect {
                Expect::Terminator => {
                    self.expect = Expect::Date;
                    Ok(())
                }
                Expect::Date => Err(self.error("unexpected blank line between records")),
                other => Err(self.error(format!(
                    "record ends early; expected {}",
                    other.label()
                ))),
            };
        }

        match self.expect {
            Expect::Date => {
                let value = self.field_value(line)?;
                let date = parse_date(value).map_err(|e| self.error(e.to_string()))?;
                self.date = Some(date);
                self.expect = Expect::Category;
            }
            Expect::Category => {
                let value = self.field_value(line)?;
                let category = value
                    .parse::<Category>()
                    .map_err(|e| self.error(e.to_string()))?;
                self.category = Some(category);
                self.expect = Expect::Amount;
            }
            Expect::Amount => {
                let value = self.field_value(line)?;
                let amount = parse_amount(value).map_err(|e| self.error(e.to_string()))?;
                self.amount = Some(amount);
                self.expect = Expect::Description;
            }
            Expect::Description => {
                let value = self.field_value(line)?;
                let description = value.strip_prefix(' ').unwrap_or(value);
                self.emit(description)?;
                self.expect = Expect::Terminator;
            }
            Expect::Terminator => {
                return Err(self.error("expected a blank line after Description"));
            }
        }
        Ok(())
    }

    /// Finish parsing and return every record in file order.
    ///
    /// A final block missing its blank terminator line is accepted.
    pub fn finish(self) -> Result<Vec<Record>> {
        match self.expect {
            Expect::Date | Expect::Terminator => Ok(self.records),
            other => Err(WalletError::Parse {
                line: self.line,
                message: format!("file ends inside a record; expected {}", other.label()),
            }),
        }
    }

    /// Strip the expected label from `line`, naming what was found instead on mismatch.
    fn field_value<'l>(&self, line: &'l str) -> Result<&'l str> {
        let expected = self.expect.label();
        line.strip_prefix(expected).ok_or_else(|| {
            let message = match known_label(line) {
                Some(found) => format!("expected {} but found {}", expected, found),
                None => format!("unrecognized line (expected {})", expected),
            };
            self.error(message)
        })
    }

    fn emit(&mut self, description: &str) -> Result<()> {
        let fields = (self.date.take(), self.category.take(), self.amount.take());
        let (Some(date), Some(category), Some(amount)) = fields else {
            return Err(self.error("incomplete record"));
        };
        let record = Record::new(date, category, amount, description)
            .map_err(|e| self.error(e.to_string()))?;
        self.records.push(record);
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> WalletError {
        WalletError::Parse {
            line: self.line,
            message: message.into(),
        }
    }
}

fn known_label(line: &str) -> Option<&'static str> {
    [DATE_LABEL, CATEGORY_LABEL, AMOUNT_LABEL, DESCRIPTION_LABEL]
        .into_iter()
        .find(|label| line.starts_with(label))
}
