//! Demo 02: Filtering and Sorting
//!
//! Shows the named views (today, overdue, scheduled, pending, completed)
//! and the display ordering: pending before completed, ascending due date.
//!
//! Run with: cargo run --example 02_filtering

use chrono::NaiveDate;
use eyre::Result;
use todostore::{TaskFilter, TaskStore, sort_tasks};

fn main() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date");

    println!("todostore Filtering Demo (reference date {today})");
    println!("=================================================\n");

    let mut store = TaskStore::open(temp_dir.path())?;

    store.add("File taxes", "2024-01-09")?;
    store.add("Team standup", "2024-01-10")?;
    store.add("Dentist appointment", "2024-01-15")?;
    let groceries = store.add("Groceries", "2024-01-12")?.expect("valid add");
    store.toggle_state(groceries.id)?;

    for filter in [
        TaskFilter::All,
        TaskFilter::Today,
        TaskFilter::Overdue,
        TaskFilter::Scheduled,
        TaskFilter::Pending,
        TaskFilter::Completed,
    ] {
        let mut view = store.filtered(filter, today);
        sort_tasks(&mut view);

        println!("View '{}' ({} task(s)):", filter, view.len());
        for task in &view {
            println!("  {}  {}  {:?}", task.date, task.text, task.state);
        }
        println!();
    }

    println!("Demo complete!");
    Ok(())
}
