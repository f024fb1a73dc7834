//! Command-line interface for tdl
//!
//! The surface is flag-based rather than subcommand-based: several flags may
//! combine in one invocation and always execute in a fixed order
//! (add, list, report, query, delete, done), followed by a single save.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Parser;

use crate::error::Result;
use crate::lock::{FileLock, DEFAULT_LOCK_TIMEOUT_MS};
use crate::output::{render_table, LIST_HEADERS, REPORT_HEADERS};
use crate::storage::{Storage, DEFAULT_STATE_FILE};
use crate::store::{DoneOutcome, TaskStore};
use crate::task;

/// tdl - personal task tracking
///
/// Tracks tasks with a name, priority, and optional due date in a hidden
/// file in the current directory.
#[derive(Parser, Debug)]
#[command(name = "tdl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Backing task file
    #[arg(long, env = "TDL_FILE", default_value = DEFAULT_STATE_FILE)]
    pub file: PathBuf,

    /// Add a task with the given name
    #[arg(long, value_name = "NAME")]
    pub add: Option<String>,

    /// Priority for --add: 1, 2, or 3
    #[arg(long, value_name = "1|2|3", default_value_t = 1)]
    pub priority: u8,

    /// Due date for --add
    #[arg(long, value_name = "MM/DD/YYYY", value_parser = parse_due_arg)]
    pub due: Option<NaiveDate>,

    /// List open tasks, most distant due date first
    #[arg(long)]
    pub list: bool,

    /// Show every task including completed ones, newest first
    #[arg(long)]
    pub report: bool,

    /// Show open tasks whose name contains a term (one row per matching term)
    #[arg(long, num_args = 1.., value_name = "TERM")]
    pub query: Option<Vec<String>>,

    /// Delete the task with the given id
    #[arg(long, value_name = "ID")]
    pub delete: Option<u64>,

    /// Mark the task with the given id as completed
    #[arg(long, value_name = "ID")]
    pub done: Option<u64>,
}

fn parse_due_arg(raw: &str) -> std::result::Result<NaiveDate, String> {
    task::parse_due_date(raw).map_err(|err| err.to_string())
}

impl Cli {
    /// Execute the requested operations against the store, then save.
    ///
    /// An advisory lock on a sidecar file covers the whole load/mutate/save
    /// window so two concurrent invocations cannot lose each other's writes.
    pub fn run(&self) -> Result<()> {
        let storage = Storage::new(self.file.clone());
        let _lock = FileLock::acquire(storage.lock_path(), DEFAULT_LOCK_TIMEOUT_MS)?;

        let mut store = TaskStore::load(storage)?;
        let now = Utc::now();

        if let Some(name) = &self.add {
            let id = store.add(name, self.priority, self.due)?;
            println!("Created Task: {id}");
        }

        if self.list {
            println!("{}", render_table(&LIST_HEADERS, &store.list(now)));
        }

        if self.report {
            println!("{}", render_table(&REPORT_HEADERS, &store.report(now)));
        }

        if let Some(terms) = &self.query {
            println!("{}", render_table(&LIST_HEADERS, &store.query(terms, now)));
        }

        if let Some(id) = self.delete {
            if store.delete(id) {
                println!("Deleted Task: {id}");
            }
        }

        if let Some(id) = self.done {
            if store.done(id) == DoneOutcome::Completed {
                println!("Completed Task: {id}");
            }
        }

        store.save()
    }
}
