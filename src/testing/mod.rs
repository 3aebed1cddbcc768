mod mock_clipboard;
mod static_templates;

pub use memory_store::MemoryStore;
pub use mock_clipboard::MockClipboard;
pub use static_templates::StaticTemplates;

use crate::app::AppContext;
use crate::app::config::AppConfig;
use crate::domain::{Template, TemplateDraft};

pub type TestContext = AppContext<MemoryStore, StaticTemplates>;

/// Context over an empty in-memory store with no generation delay.
pub fn test_context() -> TestContext {
    let mut config = AppConfig::default();
    config.generation.delay_ms = 0;
    AppContext::new(MemoryStore::new(), StaticTemplates, config)
}

pub fn custom_template(id: &str) -> Template {
    TemplateDraft::new("Custom One", "test template", "Custom: {{content}}")
        .into_custom(id.to_string())
        .unwrap()
}
