// Task model for the todo list

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single unit of work with a text label and a due date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub date: NaiveDate,
    pub state: TaskState,
}

/// Task status. `Pending` orders before `Completed` for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Completed,
}

impl TaskState {
    /// The other state. Applying this twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            TaskState::Pending => TaskState::Completed,
            TaskState::Completed => TaskState::Pending,
        }
    }
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}
