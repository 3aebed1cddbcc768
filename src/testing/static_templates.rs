use crate::domain::{AppError, Template};
use crate::ports::BuiltinTemplateSource;

/// Two small built-ins: `first` (the default) and `direct-message`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTemplates;

impl BuiltinTemplateSource for StaticTemplates {
    fn builtin_templates(&self) -> Result<Vec<Template>, AppError> {
        Ok(vec![builtin("first", "First: {{content}}"), builtin("direct-message", "DM: [msg]")])
    }
}

fn builtin(id: &str, content: &str) -> Template {
    Template {
        id: id.to_string(),
        name: format!("Built-in {}", id),
        description: String::new(),
        content: content.to_string(),
        placeholder_trigger: (id == "direct-message").then(|| "[msg]".to_string()),
        is_custom: false,
    }
}
