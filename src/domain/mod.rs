pub mod catalog;
pub mod error;
pub mod export;
pub mod history;
pub mod resolver;
pub mod session;
pub mod template;

pub use catalog::TemplateCatalog;
pub use error::AppError;
pub use export::{ExportFormat, export_file_name};
pub use history::{HISTORY_LIMIT, History, HistoryEntry};
pub use resolver::{CHAR_LIMIT_PRESETS, ResolveOptions, resolve};
pub use session::{RestoreOutcome, SAMPLE_CONTENT, SAMPLE_TEMPLATE_ID, Session};
pub use template::{DEFAULT_PLACEHOLDER, MAX_CUSTOM_TEMPLATES, Template, TemplateDraft};
