//! Commands acting on the session's current input and output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::AppContext;
use crate::app::state;
use crate::domain::{AppError, ExportFormat, Session, export_file_name};
use crate::ports::{BuiltinTemplateSource, ClipboardWriter, KeyValueStore};

/// The most recent generated prompt.
pub fn current<S, B>(ctx: &AppContext<S, B>) -> Result<String, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    current_session(ctx)?.generated_content.ok_or(AppError::NoGeneratedContent)
}

/// Copy the current output verbatim.
pub fn copy<S, B, C>(ctx: &AppContext<S, B>, clipboard: &mut C) -> Result<usize, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
    C: ClipboardWriter,
{
    let text = current(ctx)?;
    clipboard.write_text(&text)?;
    Ok(text.chars().count())
}

/// Write the current output to `prompt_<timestamp>.<ext>` inside `dir`.
pub fn export<S, B>(
    ctx: &AppContext<S, B>,
    format: ExportFormat,
    dir: &Path,
) -> Result<PathBuf, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let text = current(ctx)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(format, &Local::now()));
    fs::write(&path, text.as_bytes())?;
    log::info!("Exported {} bytes to {}", text.len(), path.display());
    Ok(path)
}

/// Forget the current input and output.
pub fn clear<S, B>(ctx: &AppContext<S, B>) -> Result<(), AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let mut session = current_session(ctx)?;
    session.clear();
    state::save_session(ctx.store(), &session)
}

/// Load the code sample as the current input and return the updated session.
pub fn load_sample<S, B>(ctx: &AppContext<S, B>) -> Result<Session, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let catalog = state::load_catalog(ctx)?;
    let mut session = state::load_session(ctx.store(), &catalog)?;
    session.load_sample(&catalog);
    state::save_session(ctx.store(), &session)?;
    Ok(session)
}

fn current_session<S, B>(ctx: &AppContext<S, B>) -> Result<Session, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let catalog = state::load_catalog(ctx)?;
    state::load_session(ctx.store(), &catalog)
}
