use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, Template};
use crate::ports::BuiltinTemplateSource;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const CATALOG_FILE: &str = "catalog.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogManifest {
    templates: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogEntry {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    file: String,
    placeholder_trigger: Option<String>,
}

/// Built-in templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl BuiltinTemplateSource for EmbeddedTemplates {
    fn builtin_templates(&self) -> Result<Vec<Template>, AppError> {
        let manifest: CatalogManifest = toml::from_str(read_asset(CATALOG_FILE)?)?;

        manifest
            .templates
            .into_iter()
            .map(|entry| -> Result<Template, AppError> {
                let body = read_asset(&entry.file)?;
                Ok(Template {
                    id: entry.id,
                    name: entry.name,
                    description: entry.description,
                    // Asset files end with a newline that is not part of the template.
                    content: body.strip_suffix('\n').unwrap_or(body).to_string(),
                    placeholder_trigger: entry.placeholder_trigger,
                    is_custom: false,
                })
            })
            .collect()
    }
}

fn read_asset(path: &str) -> Result<&'static str, AppError> {
    TEMPLATES_DIR
        .get_file(path)
        .ok_or_else(|| AppError::Asset(format!("missing template asset '{}'", path)))?
        .contents_utf8()
        .ok_or_else(|| AppError::Asset(format!("template asset '{}' is not UTF-8", path)))
}
