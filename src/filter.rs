// Named view predicates over the task collection

use crate::task::{Task, TaskState};
use chrono::NaiveDate;

/// Named predicate selecting a subset of tasks for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    Today,
    Overdue,
    Scheduled,
    Pending,
    Completed,
}

impl TaskFilter {
    /// Whether `task` belongs to this view, relative to the calendar day
    /// `today`. Dates are compared at day granularity.
    ///
    /// `Scheduled` keeps every future-dated task, completed ones included,
    /// so a done task stays visible in the upcoming view.
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Today => task.date == today && task.state == TaskState::Pending,
            TaskFilter::Overdue => task.date < today && task.state == TaskState::Pending,
            TaskFilter::Scheduled => task.date > today,
            TaskFilter::Pending => task.state == TaskState::Pending,
            TaskFilter::Completed => task.state == TaskState::Completed,
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(TaskFilter::All),
            "today" => Ok(TaskFilter::Today),
            "overdue" => Ok(TaskFilter::Overdue),
            "scheduled" => Ok(TaskFilter::Scheduled),
            "pending" => Ok(TaskFilter::Pending),
            "completed" => Ok(TaskFilter::Completed),
            other => Err(format!(
                "unknown filter '{other}' (expected all, today, overdue, scheduled, pending or completed)"
            )),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Today => write!(f, "today"),
            TaskFilter::Overdue => write!(f, "overdue"),
            TaskFilter::Scheduled => write!(f, "scheduled"),
            TaskFilter::Pending => write!(f, "pending"),
            TaskFilter::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(date: NaiveDate, state: TaskState) -> Task {
        Task {
            id: 1,
            text: "test".to_string(),
            date,
            state,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        let today = day(2024, 1, 10);
        assert!(TaskFilter::All.matches(&task(day(2023, 5, 1), TaskState::Completed), today));
        assert!(TaskFilter::All.matches(&task(day(2025, 5, 1), TaskState::Pending), today));
    }

    #[test]
    fn test_today_requires_same_day_and_pending() {
        let today = day(2024, 1, 10);
        assert!(TaskFilter::Today.matches(&task(today, TaskState::Pending), today));
        assert!(!TaskFilter::Today.matches(&task(today, TaskState::Completed), today));
        assert!(!TaskFilter::Today.matches(&task(day(2024, 1, 9), TaskState::Pending), today));
        assert!(!TaskFilter::Today.matches(&task(day(2024, 1, 11), TaskState::Pending), today));
    }

    #[test]
    fn test_overdue_is_strictly_before_and_pending() {
        let today = day(2024, 1, 10);
        assert!(TaskFilter::Overdue.matches(&task(day(2024, 1, 9), TaskState::Pending), today));
        assert!(!TaskFilter::Overdue.matches(&task(today, TaskState::Pending), today));
        assert!(!TaskFilter::Overdue.matches(&task(day(2024, 1, 9), TaskState::Completed), today));
    }

    #[test]
    fn test_scheduled_is_strictly_after_any_state() {
        let today = day(2024, 1, 10);
        assert!(TaskFilter::Scheduled.matches(&task(day(2024, 1, 11), TaskState::Pending), today));
        assert!(TaskFilter::Scheduled.matches(&task(day(2024, 1, 11), TaskState::Completed), today));
        assert!(!TaskFilter::Scheduled.matches(&task(today, TaskState::Pending), today));
        assert!(!TaskFilter::Scheduled.matches(&task(day(2024, 1, 9), TaskState::Pending), today));
    }

    #[test]
    fn test_state_filters_match_exactly() {
        let today = day(2024, 1, 10);
        let pending = task(day(2024, 1, 1), TaskState::Pending);
        let completed = task(day(2024, 1, 1), TaskState::Completed);

        assert!(TaskFilter::Pending.matches(&pending, today));
        assert!(!TaskFilter::Pending.matches(&completed, today));
        assert!(TaskFilter::Completed.matches(&completed, today));
        assert!(!TaskFilter::Completed.matches(&pending, today));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("Overdue".parse::<TaskFilter>().unwrap(), TaskFilter::Overdue);
        assert_eq!("SCHEDULED".parse::<TaskFilter>().unwrap(), TaskFilter::Scheduled);
        assert!("tomorrow".parse::<TaskFilter>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for filter in [
            TaskFilter::All,
            TaskFilter::Today,
            TaskFilter::Overdue,
            TaskFilter::Scheduled,
            TaskFilter::Pending,
            TaskFilter::Completed,
        ] {
            assert_eq!(filter.to_string().parse::<TaskFilter>().unwrap(), filter);
        }
    }
}
