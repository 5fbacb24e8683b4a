//! Plain-text record store.
//!
//! Records live in a UTF-8 file as consecutive five-line blocks (see
//! [`block`](super::block)). Appends only ever add bytes at the end; full
//! rewrites and single-record replacements go through a temp file and an
//! atomic rename.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::block::{decode_blocks, encode_block, encode_blocks, LINES_PER_BLOCK};
use super::traits::RecordStore;
use crate::error::{Result, WalletError};
use crate::fs::write_atomic;
use crate::record::Record;

/// File-backed [`RecordStore`] using the labeled block format.
#[derive(Debug, Clone)]
pub struct TextStore {
    path: PathBuf,
}

impl TextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, treating a missing file as empty.
    fn read_existing(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(WalletError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    /// Line breaks needed before a new block so it starts on a fresh line
    /// after exactly one blank line.
    fn append_separator(&self) -> io::Result<&'static str> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(""),
            Err(err) => return Err(err),
        };
        let len = file.metadata()?.len();
        if len == 0 {
            return Ok("");
        }
        let tail_len = len.min(4);
        file.seek(SeekFrom::End(-(tail_len as i64)))?;
        let mut tail = Vec::with_capacity(tail_len as usize);
        file.read_to_end(&mut tail)?;
        tail.retain(|byte| *byte != b'\r');

        Ok(if tail.ends_with(b"\n\n") {
            ""
        } else if tail.ends_with(b"\n") {
            "\n"
        } else {
            "\n\n"
        })
    }

    fn storage_error(&self, action: &str, err: io::Error) -> WalletError {
        WalletError::Storage(format!(
            "Failed to {} {}: {}",
            action,
            self.path.display(),
            err
        ))
    }
}

impl RecordStore for TextStore {
    fn load(&self) -> Result<Vec<Record>> {
        let Some(text) = self.read_existing()? else {
            debug!(path = %self.path.display(), "No data file yet; starting empty");
            return Ok(Vec::new());
        };
        let records = decode_blocks(&text)?;
        debug!(path = %self.path.display(), count = records.len(), "Loaded records");
        Ok(records)
    }

    fn append(&mut self, record: &Record) -> Result<()> {
        let separator = self
            .append_separator()
            .map_err(|e| self.storage_error("inspect", e))?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.storage_error("open", e))?;
        let mut data = String::from(separator);
        data.push_str(&encode_block(record));
        file.write_all(data.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| self.storage_error("append to", e))?;
        debug!(path = %self.path.display(), "Appended record");
        Ok(())
    }

    fn rewrite_all(&mut self, records: &[Record]) -> Result<()> {
        write_atomic(&self.path, encode_blocks(records).as_bytes())
            .map_err(|e| self.storage_error("write", e))?;
        info!(path = %self.path.display(), count = records.len(), "Saved ledger");
        Ok(())
    }

    fn replace_at(&mut self, index: usize, record: &Record) -> Result<()> {
        let text = self.read_existing()?.unwrap_or_default();
        // Keep line endings so untouched lines are copied byte for byte.
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        let start = index.saturating_mul(LINES_PER_BLOCK);
        if start >= lines.len() {
            return Err(WalletError::IndexOutOfRange {
                index,
                len: lines.len().div_ceil(LINES_PER_BLOCK),
            });
        }
        if !lines[start].starts_with("Date:") {
            return Err(WalletError::Parse {
                line: start + 1,
                message: format!("record {} does not start here; file is out of sync", index),
            });
        }
        let end = (start + LINES_PER_BLOCK).min(lines.len());

        let mut contents = String::with_capacity(text.len() + LINES_PER_BLOCK * 16);
        contents.extend(lines[..start].iter().copied());
        contents.push_str(&encode_block(record));
        contents.extend(lines[end..].iter().copied());

        write_atomic(&self.path, contents.as_bytes())
            .map_err(|e| self.storage_error("write", e))?;
        debug!(path = %self.path.display(), index, "Replaced record");
        Ok(())
    }
}
