//! File-based session store — one pretty-printed JSON snapshot.
//!
//! Storage location: `~/.promptsmith/session.json` unless configured.
//! The file is human-inspectable and can be edited or deleted by hand. A
//! file that no longer parses is reported and treated as "nothing saved",
//! so a broken file never blocks a new session.

use async_trait::async_trait;
use promptsmith_core::error::StoreError;
use promptsmith_core::store::{SessionSnapshot, SessionStore};
use std::path::PathBuf;
use tracing::{debug, warn};

/// A file-backed session store.
///
/// Reads hit the disk every time so external edits are picked up; writes
/// replace the whole file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SessionStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StoreError::Io(format!(
                    "Failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<SessionSnapshot>(&content) {
            Ok(snapshot) => {
                debug!(path = %self.path.display(), step = snapshot.step, "Session loaded");
                Ok(Some(snapshot))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring corrupted session file");
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::Io(format!("Failed to create session directory: {e}"))
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StoreError::Io(format!("Failed to write session file: {e}")))?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(format!("Failed to remove session file: {e}"))),
        }
    }
}
