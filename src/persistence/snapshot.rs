use crate::domain::{Settings, Task};
use crate::persistence::files::{atomic_write, backup_file, read_file};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub settings: Settings,
}

/// Borrowed view of the state, used for saving without cloning
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SnapshotRef<'a> {
    pub tasks: &'a [Task],
    pub settings: &'a Settings,
}

/// Durable storage for the snapshot
pub trait SnapshotStore {
    /// Load the stored snapshot; None when nothing has been saved yet
    fn load(&self) -> Result<Option<Snapshot>>;

    fn save(&mut self, snapshot: SnapshotRef<'_>) -> Result<()>;
}

/// Snapshot stored as pretty JSON in a single file
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let Some(content) = read_file(&self.path)? else {
            return Ok(None);
        };

        match serde_json::from_str(&content) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(err) => {
                // Keep the unreadable file so the next save can't destroy it
                let backup = backup_file(&self.path)?;
                Err(err).with_context(|| {
                    format!(
                        "Failed to parse {} (copied to {})",
                        self.path.display(),
                        backup.display()
                    )
                })
            }
        }
    }

    fn save(&mut self, snapshot: SnapshotRef<'_>) -> Result<()> {
        let json = serde_json::to_string_pretty(&snapshot)?;
        atomic_write(&self.path, &json)
    }
}

#[cfg(test)]
pub use memory::MemorySnapshotStore;
