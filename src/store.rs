// TaskStore: in-memory task collection synchronized with a persisted document

use crate::filter::TaskFilter;
use crate::storage;
use crate::task::{Task, TaskState, now_ms};
use chrono::NaiveDate;
use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const STORE_FILE: &str = "todolist.json";

/// Single source of truth for the task collection.
///
/// Every mutation rewrites the whole persisted document; reads never touch
/// storage. Unknown ids are silent no-ops, and a missing or corrupt store
/// file loads as an empty collection.
pub struct TaskStore {
    store_path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open or create a store rooted at the given directory
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base = path.as_ref();

        // Create directory if it doesn't exist
        fs::create_dir_all(base).context("Failed to create store directory")?;

        let store_path = base.join(STORE_FILE);
        let tasks = storage::read_tasks(&store_path);
        debug!(file = ?store_path, count = tasks.len(), "Opened task store");

        Ok(Self { store_path, tasks })
    }

    /// The collection in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Discard in-memory state and reload from storage
    pub fn reload(&mut self) {
        self.tasks = storage::read_tasks(&self.store_path);
    }

    // ========================================================================
    // Mutations (each one persists the full collection)
    // ========================================================================

    /// Append a new pending task and persist.
    ///
    /// `text` is trimmed; `date` must parse as `YYYY-MM-DD`. Empty text and
    /// empty or unparseable dates reject the add as a no-op returning
    /// `Ok(None)`, with nothing persisted. The `Err` case covers persistence
    /// failures only.
    pub fn add(&mut self, text: &str, date: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Rejected add: empty text");
            return Ok(None);
        }
        let Ok(date) = date.parse::<NaiveDate>() else {
            debug!(date, "Rejected add: not a calendar date");
            return Ok(None);
        };

        let task = Task {
            id: self.next_id(),
            text: text.to_string(),
            date,
            state: TaskState::Pending,
        };
        self.tasks.push(task.clone());
        self.persist()?;

        info!(id = task.id, "Added task");
        Ok(Some(task))
    }

    /// Flip a task between pending and completed and persist.
    /// Unknown ids leave the collection and storage untouched.
    pub fn toggle_state(&mut self, id: i64) -> Result<()> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "toggle_state: no such task");
            return Ok(());
        };

        task.state = task.state.toggled();
        self.persist()
    }

    /// Remove a task by id and persist.
    /// Unknown ids leave the collection and storage untouched.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!(id, "delete: no such task");
            return Ok(());
        }
        self.persist()
    }

    // ========================================================================
    // Derived views (pure reads)
    // ========================================================================

    /// Derive the view for a filter without mutating the collection
    pub fn filtered(&self, filter: TaskFilter, today: NaiveDate) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t, today))
            .cloned()
            .collect()
    }

    fn persist(&self) -> Result<()> {
        storage::write_tasks(&self.store_path, &self.tasks)
    }

    /// Ids are creation timestamps in milliseconds. Bump past the current
    /// maximum so two adds within the same millisecond stay distinct.
    fn next_id(&self) -> i64 {
        let id = now_ms();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if id <= max => max + 1,
            _ => id,
        }
    }
}

/// Display ordering: pending before completed, then ascending due date
/// within each group. Stable, so equal keys keep their insertion order.
/// Recomputed per display request, never persisted.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by_key(|t| (t.state, t.date));
}
