//! Data Models
//!
//! Core data structures shared across components.

use serde::{Deserialize, Serialize};

/// A user-entered to-do item with completion status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Creation timestamp in milliseconds, used as the unique key
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Subset criterion applied to the task list for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// A post from the remote resource, read-only
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// In-app navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Posts,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Posts => "Posts",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_predicates() {
        let open = Task::new(1, "open".to_string());
        let mut done = Task::new(2, "done".to_string());
        done.completed = true;

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Completed.matches(&done));
    }

    #[test]
    fn task_list_round_trips_through_json() {
        let mut second = Task::new(2, "walk dog".to_string());
        second.completed = true;
        let tasks = vec![Task::new(1, "buy milk".to_string()), second];

        let json = serde_json::to_string(&tasks).unwrap();
        let back: Vec<Task> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tasks);
    }
}
