//! Typed access to the documents kept in the key-value store.
//!
//! Documents that fail to parse are treated as absent: the caller gets the
//! built-ins only, an empty history, or a fresh session.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::AppContext;
use crate::domain::{AppError, History, HistoryEntry, Session, Template, TemplateCatalog};
use crate::ports::{BuiltinTemplateSource, KeyValueStore};

pub const CUSTOM_TEMPLATES_KEY: &str = "custom_templates";
pub const RECENT_PROMPTS_KEY: &str = "recent_prompts";
pub const SESSION_KEY: &str = "session";
/// Lock held for the duration of one generation.
pub const GENERATION_LOCK: &str = "generating";

pub fn load_catalog<S, B>(ctx: &AppContext<S, B>) -> Result<TemplateCatalog, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let builtins = ctx.builtins().builtin_templates()?;
    let custom: Vec<Template> =
        load_document(ctx.store(), CUSTOM_TEMPLATES_KEY)?.unwrap_or_default();
    TemplateCatalog::new(builtins, custom)
}

/// Persist only the custom templates; built-ins always come from the binary.
pub fn save_custom_templates<S: KeyValueStore>(
    store: &S,
    catalog: &TemplateCatalog,
) -> Result<(), AppError> {
    save_document(store, CUSTOM_TEMPLATES_KEY, catalog.custom())
}

pub fn load_history<S: KeyValueStore>(store: &S) -> Result<History, AppError> {
    let entries: Option<Vec<HistoryEntry>> = load_document(store, RECENT_PROMPTS_KEY)?;
    Ok(entries.map(History::from_entries).unwrap_or_default())
}

pub fn save_history<S: KeyValueStore>(store: &S, history: &History) -> Result<(), AppError> {
    save_document(store, RECENT_PROMPTS_KEY, history)
}

/// Load the session, starting on the catalog's default template when none is stored.
pub fn load_session<S: KeyValueStore>(
    store: &S,
    catalog: &TemplateCatalog,
) -> Result<Session, AppError> {
    Ok(load_document(store, SESSION_KEY)?
        .unwrap_or_else(|| Session::new(catalog.default_template().id.clone())))
}

pub fn save_session<S: KeyValueStore>(store: &S, session: &Session) -> Result<(), AppError> {
    save_document(store, SESSION_KEY, session)
}

fn load_document<S, T>(store: &S, key: &str) -> Result<Option<T>, AppError>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            log::warn!("Ignoring malformed '{}' document: {}", key, err);
            Ok(None)
        }
    }
}

fn save_document<S, T>(store: &S, key: &str, value: &T) -> Result<(), AppError>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json)
}
