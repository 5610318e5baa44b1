//! Command implementations.
//!
//! Every command that touches answers goes through [`Workspace`]: load the
//! config, open the configured store, hydrate the session, and save it back
//! after a mutation when autosave is on.

pub mod answers;
pub mod config_cmd;
pub mod document;
pub mod init;
pub mod render;
pub mod share;
pub mod wizard;

use promptsmith_config::AppConfig;
use promptsmith_core::{Session, SessionStore};

pub struct Workspace {
    pub config: AppConfig,
    pub session: Session,
    store: Box<dyn SessionStore>,
}

impl Workspace {
    pub async fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
        let store = promptsmith_store::build_from_config(&config);
        let session = match store.load().await? {
            Some(snapshot) => Session::from_snapshot(snapshot),
            None => Session::new(),
        };
        tracing::debug!(store = store.name(), step = session.step(), "Session opened");
        Ok(Self {
            config,
            session,
            store,
        })
    }

    /// Persist the session if autosave is enabled.
    pub async fn persist(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.config.store.autosave {
            self.store.save(&self.session.snapshot()).await?;
        } else {
            tracing::debug!("Autosave disabled, session not written");
        }
        Ok(())
    }

    /// Drop the saved session entirely.
    pub async fn forget(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.store.clear().await?;
        Ok(())
    }
}
