use crate::app::AppContext;
use crate::app::state;
use crate::domain::{AppError, HistoryEntry, RestoreOutcome};
use crate::ports::{BuiltinTemplateSource, KeyValueStore};

/// Recent generations, newest first.
pub fn list<S: KeyValueStore>(store: &S) -> Result<Vec<HistoryEntry>, AppError> {
    Ok(state::load_history(store)?.entries().to_vec())
}

/// Load the entry at `position` (1 = newest) back into the session.
pub fn restore<S, B>(
    ctx: &AppContext<S, B>,
    position: usize,
) -> Result<(HistoryEntry, RestoreOutcome), AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let history = state::load_history(ctx.store())?;
    let entry = history.get(position).cloned().ok_or(AppError::HistoryEntryNotFound {
        position,
        available: history.len(),
    })?;

    let catalog = state::load_catalog(ctx)?;
    let mut session = state::load_session(ctx.store(), &catalog)?;
    let outcome = session.restore(&entry, &catalog);
    state::save_session(ctx.store(), &session)?;

    if !outcome.template_restored {
        log::info!("Template '{}' no longer exists; restored content only", entry.template_id);
    }
    Ok((entry, outcome))
}

/// Drop every history entry.
pub fn clear<S: KeyValueStore>(store: &S) -> Result<usize, AppError> {
    let mut history = state::load_history(store)?;
    let removed = history.len();
    history.clear();
    state::save_history(store, &history)?;
    Ok(removed)
}
