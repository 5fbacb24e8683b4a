//! Interactive menu shell.
//!
//! The shell owns the session's [`Ledger`] and its [`RecordStore`]. Add and
//! edit update the ledger first and then the store; choosing exit rewrites the
//! whole store from the ledger, so that final save is authoritative even if an
//! earlier incremental write failed.
//!
//! Incremental writes address blocks by ledger index. Once one of them fails
//! the file no longer lines up with the ledger, so every later change is
//! written as a full rewrite until one succeeds.

mod prompt;

use std::fmt;
use std::io::Write;

use tracing::{debug, error, info};

use wallet_core::record::{normalize_label, parse_amount, parse_date};
use wallet_core::{Category, Ledger, Record, RecordStore, SearchQuery, WalletError};

use crate::output::{balance_lines, record_lines};
use crate::ui::theme::CLEAR_SCREEN;
use crate::ui::{badge, error_message, header, success, Badge, UiContext};

pub use prompt::{LinePrompter, Prompter, TerminalPrompter};

const MENU_ITEMS: [&str; 5] = [
    "1. Show balance",
    "2. Add record",
    "3. Edit record",
    "4. Search records",
    "5. Save and exit",
];

const SAVE_HINT: &str = "The change is kept for this session; choose 5 to save everything.";

/// Terminal behaviors that only make sense with a person at the keyboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Clear the screen before drawing the menu
    pub clear_screen: bool,
    /// Wait for Enter after each action
    pub pause: bool,
}

/// Input ended partway through the session.
#[derive(Debug)]
struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("input closed")
    }
}

impl std::error::Error for InputClosed {}

/// A single-record change to mirror into the store.
enum Change<'a> {
    Append(&'a Record),
    Replace(usize, &'a Record),
}

/// Menu loop over a ledger and its backing store.
pub struct Shell<S, P, W> {
    ledger: Ledger,
    store: S,
    prompter: P,
    out: W,
    ui: UiContext,
    options: ShellOptions,
    /// Set after a failed write; the file may not match the ledger by index.
    desynced: bool,
}

impl<S: RecordStore, P: Prompter, W: Write> Shell<S, P, W> {
    pub fn new(
        ledger: Ledger,
        store: S,
        prompter: P,
        out: W,
        ui: UiContext,
        options: ShellOptions,
    ) -> Self {
        Self {
            ledger,
            store,
            prompter,
            out,
            ui,
            options,
            desynced: false,
        }
    }

    #[allow(dead_code)]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    #[allow(dead_code)]
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until the user exits or input ends, then save.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails, or if the final save fails
    /// after input has ended (there is no one left to retry).
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.draw_menu()?;
            let Some(choice) = self.prompter.input("Choice")? else {
                return self.finish();
            };

            let outcome = match choice.trim() {
                "1" => self.show_balance(),
                "2" => self.add_record(),
                "3" => self.edit_record(),
                "4" => self.search_records(),
                "5" => match self.save() {
                    Ok(()) => {
                        info!(count = self.ledger.len(), "Session ended");
                        return Ok(());
                    }
                    Err(err) => Err(err),
                },
                other => {
                    debug!(choice = other, "Ignoring unknown menu choice");
                    continue;
                }
            };

            if let Err(err) = outcome {
                if err.is::<InputClosed>() {
                    return self.finish();
                }
                self.report(err)?;
            }
            if self.options.pause {
                self.prompter.pause()?;
            }
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        debug!("Input ended; saving before exit");
        self.save()?;
        info!(count = self.ledger.len(), "Session ended");
        Ok(())
    }

    fn draw_menu(&mut self) -> anyhow::Result<()> {
        if self.options.clear_screen {
            write!(self.out, "{}", CLEAR_SCREEN)?;
        }
        writeln!(self.out, "{}", header(&self.ui, "Menu"))?;
        for item in MENU_ITEMS {
            writeln!(self.out, "{}", item)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.prompter
            .input(prompt)?
            .ok_or_else(|| anyhow::Error::new(InputClosed))
    }

    /// Prompt for all four fields, failing on the first invalid one.
    fn ask_record(&mut self) -> anyhow::Result<Record> {
        let date = parse_date(&self.ask("Date (YYYY-MM-DD)")?)?;
        let category: Category = self.ask("Category (Income/Expense)")?.parse()?;
        let amount = parse_amount(&self.ask("Amount")?)?;
        let description = self.ask("Description")?;
        Ok(Record::new(date, category, amount, description)?)
    }

    fn show_balance(&mut self) -> anyhow::Result<()> {
        let balance = self.ledger.balance();
        writeln!(self.out, "{}", header(&self.ui, "Balance"))?;
        writeln!(self.out, "{}", balance_lines(&self.ui, &balance))?;
        Ok(())
    }

    fn add_record(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", header(&self.ui, "Add record"))?;
        let record = self.ask_record()?;

        self.ledger.add(record.clone());
        debug!(index = self.ledger.len() - 1, "Added record");
        self.persist(Change::Append(&record))?;

        writeln!(self.out, "{}", success(&self.ui, "Record added."))?;
        Ok(())
    }

    fn edit_record(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", header(&self.ui, "Edit record"))?;
        let raw = self.ask("Index of record to edit")?;
        let index: usize = raw.trim().parse().map_err(|_| {
            WalletError::Validation(format!("Index must be a whole number: {}", raw.trim()))
        })?;
        let current = self
            .ledger
            .get(index)
            .ok_or(WalletError::IndexOutOfRange {
                index,
                len: self.ledger.len(),
            })?;
        writeln!(self.out, "{}", record_lines(&self.ui, index, current))?;

        let record = self.ask_record()?;
        self.ledger.edit(index, record.clone())?;
        debug!(index, "Edited record");
        self.persist(Change::Replace(index, &record))?;

        writeln!(self.out, "{}", success(&self.ui, "Record updated."))?;
        Ok(())
    }

    fn search_records(&mut self) -> anyhow::Result<()> {
        writeln!(self.out, "{}", header(&self.ui, "Search"))?;
        let date = self.ask("Date (optional)")?;
        let category = normalize_label(&self.ask("Category (optional)")?);
        let amount = self.ask("Amount (optional)")?;
        let query = SearchQuery::new()
            .date(date)
            .category(category)
            .amount(amount);

        let found = self.ledger.indexed_search(&query);
        debug!(matches = found.len(), "Search finished");
        if found.is_empty() {
            writeln!(self.out, "{}", badge(&self.ui, Badge::Info, "Nothing found."))?;
            return Ok(());
        }
        for (index, record) in found {
            writeln!(self.out, "{}", record_lines(&self.ui, index, record))?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Mirror one change into the store, falling back to a full rewrite
    /// while the file is out of step with the ledger.
    fn persist(&mut self, change: Change<'_>) -> anyhow::Result<()> {
        let result = if self.desynced {
            debug!("Data file out of step; rewriting it in full");
            self.store.rewrite_all(self.ledger.records())
        } else {
            match change {
                Change::Append(record) => self.store.append(record),
                Change::Replace(index, record) => self.store.replace_at(index, record),
            }
        };
        match result {
            Ok(()) => {
                if self.desynced {
                    info!(count = self.ledger.len(), "Data file back in step with ledger");
                }
                self.desynced = false;
                Ok(())
            }
            Err(err) => {
                self.desynced = true;
                // The ledger already holds the change, so any failure here is
                // a persistence failure, never a rejected input.
                Err(match err {
                    WalletError::Storage(_) => err,
                    other => WalletError::Storage(other.to_string()),
                }
                .into())
            }
        }
    }

    fn save(&mut self) -> anyhow::Result<()> {
        if let Err(err) = self.store.rewrite_all(self.ledger.records()) {
            self.desynced = true;
            return Err(err.into());
        }
        self.desynced = false;
        writeln!(self.out, "{}", success(&self.ui, "Ledger saved."))?;
        Ok(())
    }

    /// Print a recoverable error. Anything that is not a wallet error
    /// (terminal I/O) is passed back up.
    fn report(&mut self, err: anyhow::Error) -> anyhow::Result<()> {
        let Some(wallet_err) = err.downcast_ref::<WalletError>() else {
            return Err(err);
        };
        let message = if wallet_err.is_validation() {
            error_message(&self.ui, &wallet_err.to_string(), None)
        } else {
            error!(error = %wallet_err, "Failed to update data file");
            error_message(
                &self.ui,
                &format!("Could not save: {}", wallet_err),
                Some(SAVE_HINT),
            )
        };
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    use tempfile::tempdir;
    use wallet_core::TextStore;

    /// Store whose writes always fail, to exercise the storage error path.
    #[derive(Default)]
    struct FailingStore {
        attempts: usize,
    }

    impl RecordStore for FailingStore {
        fn load(&self) -> wallet_core::Result<Vec<Record>> {
            Ok(Vec::new())
        }

        fn append(&mut self, _record: &Record) -> wallet_core::Result<()> {
            self.attempts += 1;
            Err(WalletError::Storage("disk full".into()))
        }

        fn rewrite_all(&mut self, _records: &[Record]) -> wallet_core::Result<()> {
            self.attempts += 1;
            Err(WalletError::Storage("disk full".into()))
        }

        fn replace_at(&mut self, _index: usize, _record: &Record) -> wallet_core::Result<()> {
            self.attempts += 1;
            Err(WalletError::Storage("disk full".into()))
        }
    }

    /// Text store that fails a set number of appends, and every full rewrite
    /// after the first `rewrite_limit`.
    struct FlakyStore {
        inner: TextStore,
        failing_appends: usize,
        rewrite_limit: usize,
        rewrites: usize,
    }

    impl FlakyStore {
        fn new(path: &std::path::Path, failing_appends: usize, rewrite_limit: usize) -> Self {
            Self {
                inner: TextStore::new(path),
                failing_appends,
                rewrite_limit,
                rewrites: 0,
            }
        }
    }

    impl RecordStore for FlakyStore {
        fn load(&self) -> wallet_core::Result<Vec<Record>> {
            self.inner.load()
        }

        fn append(&mut self, record: &Record) -> wallet_core::Result<()> {
            if self.failing_appends > 0 {
                self.failing_appends -= 1;
                return Err(WalletError::Storage("disk full".into()));
            }
            self.inner.append(record)
        }

        fn rewrite_all(&mut self, records: &[Record]) -> wallet_core::Result<()> {
            self.rewrites += 1;
            if self.rewrites > self.rewrite_limit {
                return Err(WalletError::Storage("disk full".into()));
            }
            self.inner.rewrite_all(records)
        }

        fn replace_at(&mut self, index: usize, record: &Record) -> wallet_core::Result<()> {
            self.inner.replace_at(index, record)
        }
    }

    fn shell<S: RecordStore>(
        store: S,
        ledger: Ledger,
        script: &str,
    ) -> Shell<S, LinePrompter<Cursor<String>, io::Sink>, Vec<u8>> {
        Shell::new(
            ledger,
            store,
            LinePrompter::new(Cursor::new(script.to_string()), io::sink()),
            Vec::new(),
            UiContext::plain(),
            ShellOptions::default(),
        )
    }

    fn output<S: RecordStore, P: Prompter>(shell: &Shell<S, P, Vec<u8>>) -> String {
        String::from_utf8(shell.output().clone()).unwrap()
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_records(vec![
            Record::parse("2024-04-10", "Income", "50000", "Salary").unwrap(),
            Record::parse("2024-04-10", "Expense", "15000", "Rent").unwrap(),
        ])
    }

    #[test]
    fn test_balance_then_exit() {
        let dir = tempdir().unwrap();
        let store = TextStore::new(dir.path().join("data.txt"));
        let mut shell = shell(store, sample_ledger(), "1\n5\n");

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("income=50000"));
        assert!(out.contains("expense=15000"));
        assert!(out.contains("net=35000"));
        assert!(out.contains("message=Ledger saved."));
    }

    #[test]
    fn test_add_writes_store_and_ledger() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let store = TextStore::new(&path);
        let mut shell = shell(store, Ledger::new(), "2\n2024-04-25\nincome\n30000\nAdvance\n5\n");

        shell.run().unwrap();

        assert_eq!(shell.ledger().len(), 1);
        assert_eq!(shell.ledger().balance().income, 30000);
        assert!(output(&shell).contains("message=Record added."));
        let loaded = TextStore::new(&path).load().unwrap();
        assert_eq!(loaded, shell.ledger().records());
    }

    #[test]
    fn test_invalid_date_aborts_only_that_action() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut shell = shell(TextStore::new(&path), Ledger::new(), "2\n2024-13-01\n1\n5\n");

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("error=Invalid date (expected YYYY-MM-DD): 2024-13-01"));
        assert!(out.contains("income=0"));
        assert!(shell.ledger().is_empty());
    }

    #[test]
    fn test_invalid_category_and_amount() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let script = "2\n2024-04-10\nSavings\n2\n2024-04-10\nExpense\n-5\n5\n";
        let mut shell = shell(TextStore::new(&path), Ledger::new(), script);

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("error=Category must be Income or Expense."));
        assert!(out.contains("error=Amount must be positive."));
        assert!(shell.ledger().is_empty());
    }

    #[test]
    fn test_edit_replaces_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut store = TextStore::new(&path);
        let ledger = sample_ledger();
        store.rewrite_all(ledger.records()).unwrap();
        let mut shell = shell(store, ledger, "3\n0\n2024-04-10\nIncome\n80000\nSalary\n1\n5\n");

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("message=Record updated."));
        assert!(out.contains("income=80000"));
        let loaded = TextStore::new(&path).load().unwrap();
        assert_eq!(loaded[0].amount(), 80000);
        assert_eq!(loaded[1].description(), "Rent");
    }

    #[test]
    fn test_edit_unknown_index_reports_no_such_record() {
        let dir = tempdir().unwrap();
        let store = TextStore::new(dir.path().join("data.txt"));
        let mut shell = shell(store, sample_ledger(), "3\n7\n3\nfirst\n5\n");

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("error=No such record: index 7 (ledger has 2 records)"));
        assert!(out.contains("error=Index must be a whole number: first"));
        assert_eq!(shell.ledger().balance().income, 50000);
    }

    #[test]
    fn test_search_results_and_nothing_found() {
        let dir = tempdir().unwrap();
        let store = TextStore::new(dir.path().join("data.txt"));
        let script = "4\n\nincome\n\n4\n\n\n150000\n5\n";
        let mut shell = shell(store, sample_ledger(), script);

        shell.run().unwrap();

        let out = output(&shell);
        assert!(out.contains("description=Salary"));
        assert!(!out.contains("description=Rent"));
        assert!(out.contains("Nothing found."));
    }

    #[test]
    fn test_unknown_choice_redraws_menu() {
        let dir = tempdir().unwrap();
        let store = TextStore::new(dir.path().join("data.txt"));
        let mut shell = shell(store, Ledger::new(), "9\n5\n");

        shell.run().unwrap();

        assert_eq!(output(&shell).matches("wallet menu").count(), 2);
    }

    #[test]
    fn test_end_of_input_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut shell = shell(TextStore::new(&path), sample_ledger(), "1\n");

        shell.run().unwrap();

        assert_eq!(TextStore::new(&path).load().unwrap().len(), 2);
    }

    #[test]
    fn test_end_of_input_mid_action_still_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut shell = shell(TextStore::new(&path), sample_ledger(), "2\n2024-04-10\n");

        shell.run().unwrap();

        assert_eq!(shell.ledger().len(), 2);
        assert_eq!(TextStore::new(&path).load().unwrap().len(), 2);
    }

    #[test]
    fn test_storage_failure_is_reported_and_change_kept() {
        let mut shell = shell(
            FailingStore::default(),
            Ledger::new(),
            "2\n2024-04-10\nExpense\n100\nTaxi\n5\n",
        );

        let result = shell.run();

        // Exit save fails too, then input ends and the final save fails again.
        assert!(result.is_err());
        let out = output(&shell);
        assert!(out.contains("error=Could not save: Storage error: disk full"));
        assert!(out.contains(&format!("hint={}", SAVE_HINT)));
        assert_eq!(shell.ledger().len(), 1);
        assert_eq!(shell.store.attempts, 3);
    }

    #[test]
    fn test_failed_append_switches_to_full_rewrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        // First append fails; the resync rewrite succeeds; the exit save fails.
        let store = FlakyStore::new(&path, 1, 1);
        let script = "2\n2024-04-10\nIncome\n50000\nSalary\n\
                      2\n2024-04-10\nExpense\n15000\nRent\n\
                      3\n0\n2024-04-10\nIncome\n52000\nSalary (raised)\n";
        let mut shell = shell(store, Ledger::new(), script);

        assert!(shell.run().is_err());

        let on_disk = TextStore::new(&path).load().unwrap();
        assert_eq!(on_disk, shell.ledger().records());
        assert_eq!(on_disk[0].amount(), 52000);
        assert_eq!(on_disk[1].description(), "Rent");
        let out = output(&shell);
        assert_eq!(out.matches("error=Could not save").count(), 1);
        assert!(out.contains("message=Record updated."));
    }

    #[test]
    fn test_store_index_error_after_ledger_change_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        // The file is one record behind the ledger before the session starts.
        let mut store = TextStore::new(&path);
        store
            .rewrite_all(&[Record::parse("2024-04-10", "Income", "50000", "Salary").unwrap()])
            .unwrap();
        let mut shell = shell(
            FlakyStore::new(&path, 0, 0),
            sample_ledger(),
            "3\n1\n2024-04-10\nExpense\n16000\nRent\n",
        );

        assert!(shell.run().is_err());

        let out = output(&shell);
        assert!(out.contains("error=Could not save: Storage error: No such record"));
        assert_eq!(shell.ledger().records()[1].amount(), 16000);
        assert_eq!(TextStore::new(&path).load().unwrap().len(), 1);
    }
}
