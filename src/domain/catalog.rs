use super::{AppError, MAX_CUSTOM_TEMPLATES, Template};

/// Built-in templates followed by user-authored ones.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    builtins: Vec<Template>,
    custom: Vec<Template>,
}

impl TemplateCatalog {
    /// Build a catalog. Entries in `custom` not flagged as custom, or whose id
    /// collides with an earlier entry, are dropped.
    pub fn new(builtins: Vec<Template>, custom: Vec<Template>) -> Result<Self, AppError> {
        if builtins.is_empty() {
            return Err(AppError::Asset("no built-in templates available".to_string()));
        }
        let mut catalog = Self { builtins, custom: Vec::new() };
        for template in custom.into_iter().filter(|t| t.is_custom) {
            if catalog.find(&template.id).is_some() {
                log::warn!("Dropping custom template with duplicate id '{}'", template.id);
                continue;
            }
            catalog.custom.push(template);
        }
        Ok(catalog)
    }

    /// All templates: built-ins in their fixed order, then custom ones in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.builtins.iter().chain(self.custom.iter())
    }

    pub fn custom(&self) -> &[Template] {
        &self.custom
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Fallback selection after the selected template disappears.
    pub fn default_template(&self) -> &Template {
        &self.builtins[0]
    }

    /// Add a validated custom template, enforcing the cap.
    pub fn add_custom(&mut self, template: Template) -> Result<&Template, AppError> {
        if self.custom.len() >= MAX_CUSTOM_TEMPLATES {
            return Err(AppError::CustomTemplateLimit(MAX_CUSTOM_TEMPLATES));
        }
        if self.contains(&template.id) {
            return Err(AppError::InvalidTemplate(format!(
                "Template id '{}' already exists",
                template.id
            )));
        }
        self.custom.push(template);
        Ok(&self.custom[self.custom.len() - 1])
    }

    /// Remove a custom template. Built-ins are immutable.
    pub fn remove(&mut self, id: &str) -> Result<Template, AppError> {
        if self.builtins.iter().any(|t| t.id == id) {
            return Err(AppError::BuiltinTemplateImmutable(id.to_string()));
        }
        let index = self
            .custom
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| AppError::TemplateNotFound(id.to_string()))?;
        Ok(self.custom.remove(index))
    }

    /// An id of the form `custom-<millis>` not yet taken.
    pub fn next_custom_id(&self, now_millis: i64) -> String {
        let mut millis = now_millis;
        loop {
            let id = format!("custom-{}", millis);
            if !self.contains(&id) {
                return id;
            }
            millis += 1;
        }
    }
}
