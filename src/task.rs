//! Task record and its read-only view projections.
//!
//! A task's age is derived from `created_at` at render time and never
//! persisted. "No due date" is an explicit `Option::None`, not a sentinel
//! date; the sort rule for absent due dates lives in the store's comparator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire format for due dates on the CLI and in rendered tables.
pub const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// Timestamp format used by the report view for created/completed columns.
const STAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Placeholder rendered for an absent due date or completion timestamp.
const ABSENT: &str = "-";

/// One tracked to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub priority: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<NaiveDate>,
}

impl Task {
    /// Create a new open task with `created_at` set to the current time.
    pub fn new(id: u64, name: impl Into<String>, priority: u8, due_at: Option<NaiveDate>) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            created_at: Utc::now(),
            completed_at: None,
            due_at,
        }
    }

    /// A task is open until its completion timestamp is set.
    pub fn is_open(&self) -> bool {
        self.completed_at.is_none()
    }

    /// Whole days elapsed since creation, as of `now`.
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// Row for the `list` and `query` tables: ID, Age, Due Date, Priority, Task.
    pub fn list_row(&self, now: DateTime<Utc>) -> Vec<String> {
        vec![
            self.id.to_string(),
            format!("{}d", self.age_days(now)),
            self.due_display(),
            self.priority.to_string(),
            self.name.clone(),
        ]
    }

    /// Row for the `report` table: list columns plus Created and Completed.
    pub fn report_row(&self, now: DateTime<Utc>) -> Vec<String> {
        let mut row = self.list_row(now);
        row.push(format_stamp(&self.created_at));
        row.push(
            self.completed_at
                .as_ref()
                .map(format_stamp)
                .unwrap_or_else(|| ABSENT.to_string()),
        );
        row
    }

    fn due_display(&self) -> String {
        match self.due_at {
            Some(date) => date.format(DUE_DATE_FORMAT).to_string(),
            None => ABSENT.to_string(),
        }
    }
}

fn format_stamp(stamp: &DateTime<Utc>) -> String {
    stamp.format(STAMP_FORMAT).to_string()
}

/// Parse a `MM/DD/YYYY` due date from CLI input.
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|_| {
        Error::InvalidInput(format!("invalid due date {raw:?}, expected MM/DD/YYYY"))
    })
}
