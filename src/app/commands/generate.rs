use std::thread;
use std::time::Duration;

use chrono::Utc;

use crate::app::AppContext;
use crate::app::state;
use crate::domain::{AppError, ResolveOptions, Session, TemplateCatalog, resolve};
use crate::ports::{BuiltinTemplateSource, KeyValueStore};

/// Input for one generation.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    /// Select this template first; otherwise the session's selection is used.
    pub template_id: Option<String>,
    pub user_content: String,
    pub options: ResolveOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub template_id: String,
    pub template_name: String,
    pub generated: String,
    /// False when the generation repeated the newest history entry.
    pub recorded: bool,
}

/// Execute the generate command.
///
/// Resolves the selected template against the user content, records the
/// result in history and stores it as the session's current output. Only one
/// generation may run against a store at a time.
pub fn execute<S, B>(
    ctx: &AppContext<S, B>,
    request: GenerateRequest,
) -> Result<GenerateOutcome, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    if request.user_content.trim().is_empty() {
        return Err(AppError::EmptyContent);
    }

    let Some(_lock) = ctx.store().try_lock(state::GENERATION_LOCK)? else {
        return Err(AppError::GenerationInProgress);
    };

    let catalog = state::load_catalog(ctx)?;
    let mut session = state::load_session(ctx.store(), &catalog)?;

    if let Some(id) = &request.template_id {
        if !catalog.contains(id) {
            return Err(AppError::TemplateNotFound(id.clone()));
        }
        session.selected_template_id = id.clone();
    }

    session.begin_generation()?;
    let produced = produce(ctx, &catalog, &session, &request);
    session.finish_generation();
    let outcome = produced?;

    session.user_content = request.user_content;
    session.generated_content = Some(outcome.generated.clone());
    state::save_session(ctx.store(), &session)?;

    Ok(outcome)
}

fn produce<S, B>(
    ctx: &AppContext<S, B>,
    catalog: &TemplateCatalog,
    session: &Session,
    request: &GenerateRequest,
) -> Result<GenerateOutcome, AppError>
where
    S: KeyValueStore,
    B: BuiltinTemplateSource,
{
    let delay = ctx.config().generation.delay_ms;
    if delay > 0 {
        thread::sleep(Duration::from_millis(delay));
    }

    let template = catalog
        .find(&session.selected_template_id)
        .ok_or_else(|| AppError::TemplateNotFound(session.selected_template_id.clone()))?;

    let generated = resolve(template, &request.user_content, &request.options);
    log::info!("Generated {} characters from template '{}'", generated.len(), template.id);

    let mut history = state::load_history(ctx.store())?;
    let recorded = history.record(template, &request.user_content, &generated, Utc::now());
    if recorded {
        state::save_history(ctx.store(), &history)?;
    }

    Ok(GenerateOutcome {
        template_id: template.id.clone(),
        template_name: template.name.clone(),
        generated,
        recorded,
    })
}
