//! On-disk persistence for the task collection.
//!
//! The whole collection lives in one hidden file in the working directory
//! (`.tdl.json` by default), wrapped in a versioned envelope:
//!
//! ```text
//! {
//!   "schema_version": "tdl.v1",
//!   "tasks": [ ... ]
//! }
//! ```
//!
//! Writes go through a temp file + rename so a crash mid-write never leaves
//! a truncated task file behind. A failed decode leaves the original file
//! untouched.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::task::Task;

/// Current persistence schema version
pub const SCHEMA_VERSION: &str = "tdl.v1";

/// Default backing file name, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = ".tdl.json";

/// Versioned envelope around the persisted task list
#[derive(Debug, Serialize, Deserialize)]
struct TaskFile {
    schema_version: String,
    tasks: Vec<Task>,
}

/// Storage manager for one backing file
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the sidecar lock file guarding load+save
    pub fn lock_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.lock", self.path.display()))
    }

    /// Whether the backing file exists (false on the very first run)
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the full task collection from the backing file
    pub fn read(&self) -> Result<Vec<Task>> {
        let content = fs::read_to_string(&self.path)?;
        let file: TaskFile = serde_json::from_str(&content).map_err(|source| {
            Error::CorruptState {
                path: self.path.clone(),
                source,
            }
        })?;

        if file.schema_version != SCHEMA_VERSION {
            return Err(Error::UnsupportedVersion(file.schema_version));
        }

        Ok(file.tasks)
    }

    /// Write the full task collection, replacing prior content
    pub fn write(&self, tasks: &[Task]) -> Result<()> {
        let file = TaskFile {
            schema_version: SCHEMA_VERSION.to_string(),
            tasks: tasks.to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// Atomically write data using temp file + rename
///
/// The temp file lives in the same directory as the target so the rename
/// stays on one filesystem.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension(format!(
        "{}.tmp.{}",
        path.extension().and_then(|e| e.to_str()).unwrap_or(""),
        std::process::id()
    ));

    let mut temp_file = File::create(&temp_path)?;
    temp_file.write_all(data)?;
    temp_file.sync_all()?;
    drop(temp_file);

    fs::rename(&temp_path, path)?;

    Ok(())
}
