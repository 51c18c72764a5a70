//! Demo 01: Basic CRUD
//!
//! Walks through the task lifecycle: add, toggle, delete, and the
//! persist-then-reload guarantee.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use todostore::{TaskFilter, TaskStore};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;

    println!("todostore Basic CRUD Demo");
    println!("=========================\n");

    let mut store = TaskStore::open(temp_dir.path())?;

    // Add a few tasks
    println!("Adding tasks...");
    let milk = store.add("Buy milk", "2024-01-10")?.expect("valid add");
    let dog = store.add("Walk the dog", "2024-01-11")?.expect("valid add");
    println!("  Added {} - {}", milk.id, milk.text);
    println!("  Added {} - {}", dog.id, dog.text);

    // Rejected adds are silent no-ops
    assert!(store.add("", "2024-01-10")?.is_none());
    assert!(store.add("No date", "")?.is_none());
    println!("  Rejected two invalid adds, collection still has {} tasks\n", store.len());

    // Toggle and delete
    println!("Completing '{}'...", milk.text);
    store.toggle_state(milk.id)?;

    println!("Deleting '{}'...", dog.text);
    store.delete(dog.id)?;

    // Everything above was persisted; a fresh store sees the same state
    let reopened = TaskStore::open(temp_dir.path())?;
    println!("\nReopened store has {} task(s):", reopened.len());
    let today = milk.date;
    for task in reopened.filtered(TaskFilter::All, today) {
        println!("  {} - {} ({:?})", task.id, task.text, task.state);
    }

    println!("\nDemo complete!");
    Ok(())
}
