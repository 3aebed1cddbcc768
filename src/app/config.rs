//! User configuration loaded from `<home>/config.toml`.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, ExportFormat};

/// Environment variable overriding the promptkit home directory.
pub const HOME_ENV: &str = "PROMPTKIT_HOME";

const HOME_DIR_NAME: &str = ".promptkit";
const CONFIG_FILE: &str = "config.toml";
const STORE_DIR: &str = "store";

const DEFAULT_DELAY_MS: u64 = 800;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Pause before a generated prompt is produced.
    pub delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { delay_ms: DEFAULT_DELAY_MS }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Target directory for exports; the working directory when unset.
    pub directory: Option<PathBuf>,
    pub format: ExportFormat,
}

impl AppConfig {
    /// Load `config.toml` from `home`, falling back to defaults when it does not exist.
    pub fn load(home: &Path) -> Result<Self, AppError> {
        let path = home.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => parse_config_content(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Parse configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(content)?)
}

/// Resolve the promptkit home: `$PROMPTKIT_HOME`, else `$HOME/.promptkit`.
pub fn resolve_home() -> Result<PathBuf, AppError> {
    if let Some(dir) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(HOME_DIR_NAME))
        .ok_or_else(|| {
            AppError::config_error(format!("Cannot locate a home directory. Set {}.", HOME_ENV))
        })
}

/// Directory holding the persisted documents under `home`.
pub fn store_dir(home: &Path) -> PathBuf {
    home.join(STORE_DIR)
}
