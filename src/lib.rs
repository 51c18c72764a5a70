// todostore - due-dated task list with a persistent single-file store

pub mod filter;
pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use filter::TaskFilter;
pub use store::{TaskStore, sort_tasks};
pub use task::{Task, TaskState, now_ms};
