use chrono::Utc;

use crate::app::AppContext;
use crate::app::state;
use crate::domain::{AppError, Template, TemplateDraft};
use crate::ports::{BuiltinTemplateSource, KeyValueStore};

/// A template as shown in listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateListing {
    pub template: Template,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub removed: Template,
    /// Set when the removed template was selected and the selection moved.
    pub reselected: Option<String>,
}

/// List built-in then custom templates, marking the current selection.
pub fn list<S, B>(ctx: &AppContext<S, B>) -> Result<Vec<TemplateListing>, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let catalog = state::load_catalog(ctx)?;
    let session = state::load_session(ctx.store(), &catalog)?;
    Ok(catalog
        .iter()
        .map(|t| TemplateListing {
            selected: t.id == session.selected_template_id,
            template: t.clone(),
        })
        .collect())
}

/// Create a custom template and select it.
pub fn create<S, B>(ctx: &AppContext<S, B>, draft: TemplateDraft) -> Result<Template, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let mut catalog = state::load_catalog(ctx)?;
    let id = catalog.next_custom_id(Utc::now().timestamp_millis());
    let template = catalog.add_custom(draft.into_custom(id)?)?.clone();
    state::save_custom_templates(ctx.store(), &catalog)?;

    let mut session = state::load_session(ctx.store(), &catalog)?;
    session.selected_template_id = template.id.clone();
    state::save_session(ctx.store(), &session)?;

    log::info!("Created custom template '{}'", template.id);
    Ok(template)
}

/// Delete a custom template, moving the selection to the default if needed.
pub fn delete<S, B>(ctx: &AppContext<S, B>, id: &str) -> Result<DeleteOutcome, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let mut catalog = state::load_catalog(ctx)?;
    let removed = catalog.remove(id)?;
    state::save_custom_templates(ctx.store(), &catalog)?;

    let mut session = state::load_session(ctx.store(), &catalog)?;
    let reselected = if session.forget_template(id, &catalog) {
        state::save_session(ctx.store(), &session)?;
        Some(session.selected_template_id.clone())
    } else {
        None
    };

    log::info!("Deleted custom template '{}'", id);
    Ok(DeleteOutcome { removed, reselected })
}

/// Make `id` the current selection.
pub fn select<S, B>(ctx: &AppContext<S, B>, id: &str) -> Result<Template, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let catalog = state::load_catalog(ctx)?;
    let template =
        catalog.find(id).cloned().ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?;

    let mut session = state::load_session(ctx.store(), &catalog)?;
    session.selected_template_id = template.id.clone();
    state::save_session(ctx.store(), &session)?;
    Ok(template)
}
