use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use todostore::{Task, TaskFilter, TaskState, TaskStore, sort_tasks};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Due-dated task list with a persistent single-file store")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Path to the store directory (default: platform data directory)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task with a due date (YYYY-MM-DD)
    Add { text: String, date: String },

    /// Show tasks, optionally narrowed to a named view
    List {
        /// One of: all, today, overdue, scheduled, pending, completed
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,
    },

    /// Toggle a task between pending and completed
    Done { id: i64 },

    /// Delete a task
    Rm { id: i64 },
}

fn default_store_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("todostore"))
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let store_dir = cli
        .store_path
        .or_else(default_store_dir)
        .ok_or_else(|| eyre!("No --store-path given and no platform data directory found"))?;

    let mut store = TaskStore::open(&store_dir)?;
    let today = Local::now().date_naive();

    // Every mutation is followed by a fresh filter+sort+render pass
    match cli.command {
        Commands::Add { text, date } => {
            match store.add(&text, &date)? {
                Some(task) => println!("Added task {}", task.id),
                None => println!("Nothing added: task text and a YYYY-MM-DD due date are required"),
            }
            render(&store, TaskFilter::All, today);
        }
        Commands::List { filter } => {
            render(&store, filter, today);
        }
        Commands::Done { id } => {
            store.toggle_state(id)?;
            render(&store, TaskFilter::All, today);
        }
        Commands::Rm { id } => {
            store.delete(id)?;
            render(&store, TaskFilter::All, today);
        }
    }

    Ok(())
}

fn render(store: &TaskStore, filter: TaskFilter, today: NaiveDate) {
    let mut view = store.filtered(filter, today);
    sort_tasks(&mut view);

    if view.is_empty() {
        println!("No tasks in the '{}' view", filter);
        return;
    }

    for task in &view {
        println!("{}", render_line(task, today));
    }
}

fn render_line(task: &Task, today: NaiveDate) -> String {
    let date = task.date.format("%Y-%m-%d").to_string();
    let overdue = task.state == TaskState::Pending && task.date < today;

    let (marker, date, text) = match task.state {
        TaskState::Completed => ("x".green(), date.dimmed(), task.text.dimmed()),
        TaskState::Pending if overdue => (" ".normal(), date.red(), task.text.normal()),
        TaskState::Pending => (" ".normal(), date.normal(), task.text.normal()),
    };

    format!("[{}] {:>13}  {}  {}", marker, task.id, date, text)
}
