use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Template;

/// Number of generations kept.
pub const HISTORY_LIMIT: usize = 5;

/// Snapshot of one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub template_id: String,
    /// Kept so the entry stays readable after the template is deleted.
    pub template_name: String,
    pub user_content: String,
    pub generated_content: String,
    /// Unix epoch milliseconds.
    pub timestamp: i64,
}

impl HistoryEntry {
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Recent generations, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_LIMIT);
        Self { entries }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 1-based position, 1 being the newest.
    pub fn get(&self, position: usize) -> Option<&HistoryEntry> {
        position.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    /// Record a generation. Returns `false` when it repeats the newest entry's
    /// template and input, in which case nothing changes.
    pub fn record(
        &mut self,
        template: &Template,
        user_content: &str,
        generated_content: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let repeats_latest = self.entries.first().is_some_and(|latest| {
            latest.template_id == template.id && latest.user_content == user_content
        });
        if repeats_latest {
            return false;
        }

        let millis = now.timestamp_millis();
        self.entries.insert(
            0,
            HistoryEntry {
                id: millis.to_string(),
                template_id: template.id.clone(),
                template_name: template.name.clone(),
                user_content: user_content.to_string(),
                generated_content: generated_content.to_string(),
                timestamp: millis,
            },
        );
        self.entries.truncate(HISTORY_LIMIT);
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
