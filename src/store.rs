//! Task list persistence.
//!
//! Tasks are saved as a versioned JSON document so the on-disk layout is
//! decoupled from the in-memory types and stays inspectable by hand:
//!
//! ```json
//! { "version": 1, "tasks": [ { "description": "...", "due_date": "...", "is_complete": false } ] }
//! ```
//!
//! Persistence failures are never fatal to a running session: callers log
//! them and keep the in-memory list usable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::Task;

/// Current on-disk format version. Bump when the document layout changes.
const FORMAT_VERSION: u32 = 1;

/// Errors that can occur while loading or saving the task file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read task file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write task file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse task file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode task file '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Task file '{path}' has unsupported version {version} (expected {FORMAT_VERSION})")]
    UnsupportedVersion { path: PathBuf, version: u32 },
}

#[derive(Debug, Serialize, Deserialize)]
struct TaskFile {
    version: u32,
    tasks: Vec<Task>,
}

/// Handle to the tasks file. Owns only the path; every call re-reads or
/// rewrites the whole document.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `{data_dir}/tuido/tasks.json`, falling back to
    /// the current directory when the platform has no data dir.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("tuido").join("tasks.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks. A missing file is a first run and yields an empty
    /// list; anything else that goes wrong is an error for the caller to
    /// downgrade.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        let file: TaskFile = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path: self.path.clone(),
            source: e,
        })?;

        if file.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                path: self.path.clone(),
                version: file.version,
            });
        }

        Ok(file.tasks)
    }

    /// Save all tasks, replacing the previous document.
    ///
    /// The write goes through a sibling temp file and a rename so an
    /// interrupted save cannot destroy the previous list.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let file = TaskFile {
            version: FORMAT_VERSION,
            tasks: tasks.to_vec(),
        };
        let content =
            serde_json::to_string_pretty(&file).map_err(|e| StoreError::Encode {
                path: self.path.clone(),
                source: e,
            })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Write {
                    path: self.path.clone(),
                    source: e,
                })?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| StoreError::Write {
            path: tmp_path.clone(),
            source: e,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }
}
