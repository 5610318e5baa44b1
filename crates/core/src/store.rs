//! Session store trait — where a caller keeps the answer set between runs.
//!
//! The core never persists anything by itself. Callers snapshot the session
//! after a mutation and hydrate a new session from the saved snapshot at
//! startup. Implementations live in `promptsmith-store`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::answers::AnswerSet;
use crate::error::StoreError;

/// Version written into every snapshot. Bump when the snapshot shape changes
/// so loaders can migrate older files.
pub const SNAPSHOT_VERSION: u32 = 1;

/// A persisted session: the answers plus where the questionnaire stood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Current questionnaire step (0-based)
    #[serde(default)]
    pub step: usize,

    #[serde(default)]
    pub answers: AnswerSet,

    pub updated_at: DateTime<Utc>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// The core SessionStore trait.
///
/// Implementations: file (JSON), in-memory (for testing).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// The backend name (e.g., "file", "memory").
    fn name(&self) -> &str;

    /// Load the saved session, if there is one.
    async fn load(&self) -> std::result::Result<Option<SessionSnapshot>, StoreError>;

    /// Save (overwrite) the session.
    async fn save(&self, snapshot: &SessionSnapshot) -> std::result::Result<(), StoreError>;

    /// Forget the saved session. No-op if nothing is saved.
    async fn clear(&self) -> std::result::Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_serialization() {
        let mut answers = AnswerSet::default();
        answers.objective = "Draft a release note".into();
        let snap = SessionSnapshot {
            version: SNAPSHOT_VERSION,
            step: 3,
            answers,
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("Draft a release note"));
        let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn snapshot_missing_fields_take_defaults() {
        let snap: SessionSnapshot =
            serde_json::from_str(r#"{"updated_at":"2026-01-01T00:00:00Z"}"#).unwrap();
        assert_eq!(snap.version, SNAPSHOT_VERSION);
        assert_eq!(snap.step, 0);
        assert_eq!(snap.answers, AnswerSet::default());
    }
}
