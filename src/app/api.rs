//! API Facade for the application.
//!
//! Builds the real context (filesystem store under the promptkit home,
//! embedded built-ins, user config) and runs commands against it.

use std::path::{Path, PathBuf};

use crate::adapters::{EmbeddedTemplates, FilesystemStore, SystemClipboard};
use crate::app::commands::{generate, history, output, template};
use crate::app::config::{self, AppConfig};
use crate::app::{AppContext, state};
use crate::domain::{ExportFormat, HistoryEntry, RestoreOutcome, Session, Template, TemplateDraft};

pub use crate::app::commands::generate::{GenerateOutcome, GenerateRequest};
pub use crate::app::commands::template::{DeleteOutcome, TemplateListing};
pub use crate::domain::AppError;

type LiveContext = AppContext<FilesystemStore, EmbeddedTemplates>;

/// Create an `AppContext` rooted at a promptkit home directory.
fn create_context(home: &Path) -> Result<LiveContext, AppError> {
    let config = AppConfig::load(home)?;
    let store = FilesystemStore::new(config::store_dir(home));
    Ok(AppContext::new(store, EmbeddedTemplates::new(), config))
}

fn current_context() -> Result<LiveContext, AppError> {
    create_context(&config::resolve_home()?)
}

/// List templates, marking the current selection.
pub fn templates() -> Result<Vec<TemplateListing>, AppError> {
    template::list(&current_context()?)
}

/// Create and select a custom template.
pub fn template_create(draft: TemplateDraft) -> Result<Template, AppError> {
    template::create(&current_context()?, draft)
}

/// Delete a custom template.
pub fn template_delete(id: &str) -> Result<DeleteOutcome, AppError> {
    template::delete(&current_context()?, id)
}

/// Select a template by id.
pub fn template_select(id: &str) -> Result<Template, AppError> {
    template::select(&current_context()?, id)
}

/// Generate a prompt from the selected (or given) template.
pub fn generate(request: GenerateRequest) -> Result<GenerateOutcome, AppError> {
    generate::execute(&current_context()?, request)
}

/// The current session: selection, input and last output.
pub fn session() -> Result<Session, AppError> {
    let ctx = current_context()?;
    let catalog = state::load_catalog(&ctx)?;
    state::load_session(ctx.store(), &catalog)
}

/// The most recent generated prompt.
pub fn current_output() -> Result<String, AppError> {
    output::current(&current_context()?)
}

/// Clear the current input and output.
pub fn clear() -> Result<(), AppError> {
    output::clear(&current_context()?)
}

/// Load the code sample into the session.
pub fn load_sample() -> Result<Session, AppError> {
    output::load_sample(&current_context()?)
}

/// Copy the current output to the system clipboard. Returns the character count.
pub fn copy() -> Result<usize, AppError> {
    let ctx = current_context()?;
    // Fail on a missing output before touching the clipboard.
    output::current(&ctx)?;
    let mut clipboard = SystemClipboard::open()?;
    output::copy(&ctx, &mut clipboard)
}

/// Export the current output. Unset arguments fall back to the config.
pub fn export(format: Option<ExportFormat>, dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    let ctx = current_context()?;
    let format = format.unwrap_or(ctx.config().export.format);
    let dir = match dir.or_else(|| ctx.config().export.directory.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    output::export(&ctx, format, &dir)
}

/// Recent generations, newest first.
pub fn history() -> Result<Vec<HistoryEntry>, AppError> {
    history::list(current_context()?.store())
}

/// Restore a history entry (1 = newest) into the session.
pub fn history_restore(position: usize) -> Result<(HistoryEntry, RestoreOutcome), AppError> {
    history::restore(&current_context()?, position)
}

/// Remove all history entries. Returns how many were removed.
pub fn history_clear() -> Result<usize, AppError> {
    history::clear(current_context()?.store())
}
