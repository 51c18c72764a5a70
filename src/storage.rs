// Single-document JSON persistence for the task collection

use crate::task::Task;
use eyre::{Context, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Read the persisted collection from `path`.
///
/// A missing file is an empty collection. Unreadable or malformed content
/// also degrades to an empty collection with a warning, so a corrupt store
/// never fails the caller.
pub fn read_tasks(path: &Path) -> Vec<Task> {
    if !path.exists() {
        // Nothing persisted yet
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(file = ?path, error = ?e, "Failed to read store file, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str(&content) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!(file = ?path, error = ?e, "Malformed store file, starting empty");
            Vec::new()
        }
    }
}

/// Rewrite the persisted collection wholesale.
///
/// The file is locked exclusively for the duration of the write, then
/// flushed to disk.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .open(path)
        .context("Failed to open store file for writing")?;

    // Acquire exclusive lock before truncating
    file.lock_exclusive().context("Failed to acquire file lock")?;

    let json = serde_json::to_string(tasks).context("Failed to serialize task collection")?;

    file.set_len(0)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;

    debug!(file = ?path, count = tasks.len(), "Persisted task collection");

    // Lock is automatically released when file is dropped
    Ok(())
}
