//! Filesystem utilities for atomic operations.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `destination` with `contents` without exposing a partial write.
///
/// The data goes to a hidden sibling temp file, is synced to disk, and is
/// then renamed over the destination. A crash leaves either the old file or
/// the new one, never a truncated mix.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or the rename fails.
pub fn write_atomic(destination: &Path, contents: &[u8]) -> io::Result<()> {
    let temp_path = temp_path_for(destination);
    let result = (|| {
        let mut file = File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()
    })();
    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }
    rename_with_fallback(&temp_path, destination)
}

/// Sibling temp path: `data.txt` becomes `.data.txt.tmp` in the same directory.
fn temp_path_for(destination: &Path) -> PathBuf {
    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "wallet".to_string());
    destination.with_file_name(format!(".{}.tmp", name))
}

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
