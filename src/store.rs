//! The task store: owns the collection, assigns ids, and drives the
//! list/report/query views.
//!
//! Ids are never reused: the next-id counter is recomputed at load time as
//! `max(existing ids) + 1`, so it survives even though it is never stored.
//! Mutations stay in memory until the single terminal [`TaskStore::save`];
//! a crash before save loses at most the unsaved mutations.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::Storage;
use crate::task::Task;

/// Priorities accepted by `add`
const PRIORITY_RANGE: std::ops::RangeInclusive<u8> = 1..=3;

/// Names of the two tasks seeded on the very first run
const SEED_TASK_NAMES: [&str; 2] = ["Default Task_1", "Default Task_2"];

/// Result of marking a task done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoneOutcome {
    /// The task was open and is now completed
    Completed,
    /// The task was already completed; nothing changed
    AlreadyDone,
    /// No task with that id exists; nothing changed
    NotFound,
}

/// The full task collection plus the next-id counter
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Load the store from its backing file.
    ///
    /// A missing file means this is the first run: the store is seeded with
    /// two default tasks and persisted immediately so later loads are stable.
    pub fn load(storage: Storage) -> Result<Self> {
        let tasks = if storage.exists() {
            storage.read()?
        } else {
            let seeds: Vec<Task> = SEED_TASK_NAMES
                .iter()
                .enumerate()
                .map(|(idx, name)| Task::new(idx as u64 + 1, *name, 1, None))
                .collect();
            storage.write(&seeds)?;
            debug!(path = %storage.path().display(), "seeded new task file");
            seeds
        };

        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1);
        debug!(count = tasks.len(), next_id, "loaded task store");

        Ok(Self {
            storage,
            tasks,
            next_id,
        })
    }

    /// Persist the entire collection, replacing prior file content.
    pub fn save(&self) -> Result<()> {
        debug!(count = self.tasks.len(), "saving task store");
        self.storage.write(&self.tasks)
    }

    /// Create a new task and return its id.
    pub fn add(&mut self, name: &str, priority: u8, due_at: Option<NaiveDate>) -> Result<u64> {
        if name.trim().is_empty() {
            return Err(Error::InvalidInput("task name must not be empty".to_string()));
        }
        if !PRIORITY_RANGE.contains(&priority) {
            return Err(Error::InvalidInput(format!(
                "priority must be 1, 2, or 3 (got {priority})"
            )));
        }

        let task = Task::new(self.next_id, name, priority, due_at);
        let id = task.id;
        self.tasks.push(task);
        self.next_id += 1;
        debug!(id, "added task");
        Ok(id)
    }

    /// Mark the task with the given id as completed.
    ///
    /// Completing an already-completed task is a no-op, as is an unknown id.
    pub fn done(&mut self, id: u64) -> DoneOutcome {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) if task.is_open() => {
                task.completed_at = Some(Utc::now());
                debug!(id, "completed task");
                DoneOutcome::Completed
            }
            Some(_) => DoneOutcome::AlreadyDone,
            None => DoneOutcome::NotFound,
        }
    }

    /// Remove the task with the given id. Returns false for an unknown id.
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() < before;
        if removed {
            debug!(id, "deleted task");
        }
        removed
    }

    /// Rows for the `list` view: open tasks only, descending by due date.
    ///
    /// Tasks with no due date sort last (`None < Some` under `Option`'s
    /// ordering, and the sort is descending). Stable among equal keys.
    pub fn list(&self, now: DateTime<Utc>) -> Vec<Vec<String>> {
        let mut open: Vec<&Task> = self.tasks.iter().filter(|task| task.is_open()).collect();
        open.sort_by(|left, right| right.due_at.cmp(&left.due_at));
        open.iter().map(|task| task.list_row(now)).collect()
    }

    /// Rows for the `report` view: every task, descending by creation time.
    pub fn report(&self, now: DateTime<Utc>) -> Vec<Vec<String>> {
        let mut all: Vec<&Task> = self.tasks.iter().collect();
        all.sort_by(|left, right| right.created_at.cmp(&left.created_at));
        all.iter().map(|task| task.report_row(now)).collect()
    }

    /// Rows for the `query` view.
    ///
    /// Each term scans the open tasks in collection order for a
    /// case-sensitive substring match on the name. A task matching several
    /// terms appears once per matching term; rows come back in term order,
    /// then match order within each term.
    pub fn query(&self, terms: &[String], now: DateTime<Utc>) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        for term in terms {
            for task in self.tasks.iter().filter(|task| task.is_open()) {
                if task.name.contains(term.as_str()) {
                    rows.push(task.list_row(now));
                }
            }
        }
        rows
    }

    /// All tasks, in collection (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
