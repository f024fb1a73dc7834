//! tdl - Personal Task Tracking Library
//!
//! This library provides the core functionality for the tdl CLI tool:
//! a small persistent task list with priorities, due dates, and three
//! read views (list, report, query).
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `error`: Error types and result aliases
//! - `lock`: Advisory file locking around load+save
//! - `output`: Fixed-width table rendering
//! - `storage`: Versioned on-disk persistence with atomic writes
//! - `store`: The task collection, id assignment, and view policies
//! - `task`: The task record and its view projections

pub mod cli;
pub mod error;
pub mod lock;
pub mod output;
pub mod storage;
pub mod store;
pub mod task;

pub use error::{Error, Result};
