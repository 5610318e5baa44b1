//! Session store implementations for PromptSmith.

pub mod file_backend;
pub mod in_memory;

pub use file_backend::FileStore;
pub use in_memory::InMemoryStore;

use promptsmith_config::AppConfig;
use promptsmith_core::store::SessionStore;

/// Build the store selected by `config.store.backend`.
///
/// Unknown backends fall back to the file store; `AppConfig::validate`
/// rejects them before this is reached.
pub fn build_from_config(config: &AppConfig) -> Box<dyn SessionStore> {
    match config.store.backend.as_str() {
        "memory" => Box::new(InMemoryStore::new()),
        _ => Box::new(FileStore::new(config.store_path())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptsmith_config::StoreConfig;

    #[test]
    fn picks_backend_by_name() {
        let memory = AppConfig {
            store: StoreConfig {
                backend: "memory".into(),
                ..StoreConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(build_from_config(&memory).name(), "memory");
        assert_eq!(build_from_config(&AppConfig::default()).name(), "file");
    }
}
