use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::AppError;

/// File type for exported prompts. Content is identical, only the extension differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Md,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Md => "md",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "txt" => Ok(ExportFormat::Txt),
            "md" => Ok(ExportFormat::Md),
            _ => Err(AppError::InvalidExportFormat(s.to_string())),
        }
    }
}

/// `prompt_<YYYYMMDD>_<HHMM>.<ext>` in the timezone of `now`.
pub fn export_file_name<Tz: TimeZone>(format: ExportFormat, now: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("prompt_{}.{}", now.format("%Y%m%d_%H%M"), format.extension())
}
