mod builtin_templates;
mod clipboard_writer;
mod key_value_store;

pub use builtin_templates::BuiltinTemplateSource;
pub use clipboard_writer::ClipboardWriter;
pub use key_value_store::KeyValueStore;
