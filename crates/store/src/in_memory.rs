//! In-memory store — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use promptsmith_core::error::StoreError;
use promptsmith_core::store::{SessionSnapshot, SessionStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps the last saved snapshot in memory. Nothing survives the process.
pub struct InMemoryStore {
    slot: Arc<RwLock<Option<SessionSnapshot>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        *self.slot.write().await = Some(snapshot.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}
