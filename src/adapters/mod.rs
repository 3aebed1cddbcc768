mod clipboard_arboard;
mod embedded_templates;
mod filesystem_store;

pub use clipboard_arboard::SystemClipboard;
pub use embedded_templates::EmbeddedTemplates;
pub use filesystem_store::{FilesystemStore, StoreLock};
