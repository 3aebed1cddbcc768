use serde::{Deserialize, Serialize};

use super::AppError;

/// Token marking where user content goes when a template names no trigger of its own.
pub const DEFAULT_PLACEHOLDER: &str = "{{content}}";

/// Upper bound on user-authored templates.
pub const MAX_CUSTOM_TEMPLATES: usize = 10;

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 30;
const DESCRIPTION_MAX_CHARS: usize = 100;

/// A prompt template, built-in or user-authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_trigger: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
}

impl Template {
    /// The substring replaced by user content.
    pub fn placeholder(&self) -> &str {
        match self.placeholder_trigger.as_deref() {
            Some(trigger) if !trigger.is_empty() => trigger,
            _ => DEFAULT_PLACEHOLDER,
        }
    }
}

/// Unvalidated input for a new custom template.
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub content: String,
}

impl TemplateDraft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), description: description.into(), content: content.into() }
    }

    /// Check the form rules for custom templates.
    pub fn validate(&self) -> Result<(), AppError> {
        let name_len = self.name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
            return Err(AppError::InvalidTemplate(format!(
                "Name must be between {} and {} characters",
                NAME_MIN_CHARS, NAME_MAX_CHARS
            )));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_CHARS {
            return Err(AppError::InvalidTemplate(format!(
                "Description must be at most {} characters",
                DESCRIPTION_MAX_CHARS
            )));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::InvalidTemplate("Template content is required".to_string()));
        }
        Ok(())
    }

    /// Validate and turn the draft into a custom template with the given id.
    pub fn into_custom(self, id: String) -> Result<Template, AppError> {
        self.validate()?;
        Ok(Template {
            id,
            name: self.name,
            description: self.description,
            content: self.content,
            placeholder_trigger: Some(DEFAULT_PLACEHOLDER.to_string()),
            is_custom: true,
        })
    }
}
