use super::config::AppConfig;
use crate::ports::{BuiltinTemplateSource, KeyValueStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore, B: BuiltinTemplateSource> {
    store: S,
    builtins: B,
    config: AppConfig,
}

impl<S: KeyValueStore, B: BuiltinTemplateSource> AppContext<S, B> {
    /// Create a new application context.
    pub fn new(store: S, builtins: B, config: AppConfig) -> Self {
        Self { store, builtins, config }
    }

    /// Get a reference to the persistent store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the built-in template source.
    pub fn builtins(&self) -> &B {
        &self.builtins
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
