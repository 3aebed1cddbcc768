use crate::domain::{AppError, Template};

/// Port supplying the immutable templates available at startup.
pub trait BuiltinTemplateSource {
    /// Built-in templates in display order. The first one is the default selection.
    fn builtin_templates(&self) -> Result<Vec<Template>, AppError>;
}
