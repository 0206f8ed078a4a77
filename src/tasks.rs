//! Task List Controller
//!
//! In-memory CRUD over the persisted task list plus the status filter.
//! Every mutation mirrors the list into the "tasks" storage slot; storage
//! failures are absorbed by the store, so no operation here can fail.

use crate::models::{Filter, Task};
use crate::storage::{LocalStorage, PersistedStore, StorageBackend};

/// Storage slot holding the serialized task list
pub const TASKS_KEY: &str = "tasks";

/// Ordered task list with its transient filter and persistence seam
#[derive(Clone, Default)]
pub struct TaskList<B: StorageBackend> {
    store: PersistedStore<B>,
    tasks: Vec<Task>,
    filter: Filter,
}

/// The browser-backed controller used by the UI
pub type BrowserTaskList = TaskList<LocalStorage>;

impl<B: StorageBackend> TaskList<B> {
    /// Load the persisted list, or start empty when the slot is unusable
    pub fn load(store: PersistedStore<B>) -> Self {
        let tasks = store.load(TASKS_KEY, Vec::new());
        Self {
            store,
            tasks,
            filter: Filter::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Append a task with a fresh id; whitespace-only input is a no-op.
    /// Returns whether a task was added.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.tasks.push(Task::new(next_id(), trimmed.to_string()));
        self.persist();
        true
    }

    /// Flip completion on the matching task; unknown ids are a no-op
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) {
            task.completed = !task.completed;
            self.persist();
        }
    }

    /// Remove the matching task; unknown ids are a no-op
    pub fn remove(&mut self, id: u64) {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Pure state change, never persisted
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks passing the current filter, insertion order preserved
    pub fn visible(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    fn persist(&self) {
        self.store.update(TASKS_KEY, &self.tasks);
    }
}

/// Task ids are creation timestamps in milliseconds, like the browser clock
/// provides. Two tasks created within the same millisecond would collide;
/// that is not defended against.
#[cfg(target_arch = "wasm32")]
fn next_id() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn next_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(1);
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryStorage;

    fn empty_list() -> TaskList<MemoryStorage> {
        TaskList::load(PersistedStore::new(MemoryStorage::new()))
    }

    #[test]
    fn blank_text_is_not_added() {
        let mut list = empty_list();
        assert!(!list.add(""));
        assert!(!list.add("   \t "));
        assert!(list.tasks().is_empty());
    }

    #[test]
    fn add_appends_trimmed_open_task() {
        let mut list = empty_list();
        assert!(list.add("first"));
        assert!(list.add("  Buy milk  "));

        let last = list.tasks().last().unwrap();
        assert_eq!(last.text, "Buy milk");
        assert!(!last.completed);
        assert_ne!(list.tasks()[0].id, last.id);
    }

    #[test]
    fn toggle_flips_completion() {
        let mut list = empty_list();
        list.add("a");
        let id = list.tasks()[0].id;

        list.toggle(id);
        assert!(list.tasks()[0].completed);
        list.toggle(id);
        assert!(!list.tasks()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_leaves_list_unchanged() {
        let mut list = empty_list();
        list.add("a");
        let before = list.tasks().to_vec();

        list.toggle(999_999);
        assert_eq!(list.tasks(), before.as_slice());
    }

    #[test]
    fn remove_only_task_empties_list() {
        let mut list = empty_list();
        list.add("a");
        let id = list.tasks()[0].id;

        list.remove(id);
        assert!(list.tasks().is_empty());
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            list.set_filter(filter);
            assert!(list.visible().is_empty());
        }
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut list = empty_list();
        list.add("a");
        list.remove(999_999);
        assert_eq!(list.tasks().len(), 1);
    }

    #[test]
    fn visible_is_an_order_preserving_subsequence() {
        let mut list = empty_list();
        for text in ["a", "b", "c", "d"] {
            list.add(text);
        }
        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        list.toggle(ids[1]);
        list.toggle(ids[3]);

        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            list.set_filter(filter);
            let visible = list.visible();
            assert!(visible.iter().all(|task| filter.matches(task)));

            // Relative order matches the underlying list
            let mut cursor = 0;
            for task in &visible {
                let pos = list.tasks()[cursor..]
                    .iter()
                    .position(|t| t.id == task.id)
                    .expect("visible task must come from the list, in order");
                cursor += pos + 1;
            }
        }
        list.set_filter(Filter::Active);
        assert_eq!(list.visible().len(), 2);
        list.set_filter(Filter::Completed);
        assert_eq!(list.visible().len(), 2);
    }

    #[test]
    fn mutations_survive_a_failing_storage_backend() {
        let mut list = TaskList::load(PersistedStore::new(MemoryStorage::failing()));
        assert!(list.add("a"));
        assert!(list.add("b"));
        let id = list.tasks()[0].id;

        list.toggle(id);
        assert!(list.tasks()[0].completed);
        list.remove(id);
        assert_eq!(list.tasks().len(), 1);
    }

    #[test]
    fn list_reloads_from_persisted_slot() {
        let backend = MemoryStorage::new();
        {
            let mut list = TaskList::load(PersistedStore::new(backend.clone()));
            list.add("persisted");
        }
        let reloaded = TaskList::load(PersistedStore::new(backend));
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].text, "persisted");
    }
}
