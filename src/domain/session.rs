use serde::{Deserialize, Serialize};

use super::{AppError, HistoryEntry, TemplateCatalog};

/// Code snippet used to try out fenced-code handling in generated prompts.
pub const SAMPLE_CONTENT: &str = r#"python
def validate_highlighting():
    """Verify syntax colors for keywords, strings, and comments."""
    sample_data = {"key": "value", "numbers": [1, 2, 3]}
    if sample_data:
        print(f"Highlighted correctly! {sample_data['key']}")
    # This comment should appear in muted gray
    return True"#;

/// Template selected together with [`SAMPLE_CONTENT`].
pub const SAMPLE_TEMPLATE_ID: &str = "direct-message";

/// The working state: selection, current input and last output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub selected_template_id: String,
    #[serde(default)]
    pub user_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_content: Option<String>,
    #[serde(skip)]
    generating: bool,
}

/// What `restore` managed to bring back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreOutcome {
    /// False when the originating template no longer exists.
    pub template_restored: bool,
}

impl Session {
    pub fn new(selected_template_id: impl Into<String>) -> Self {
        Self {
            selected_template_id: selected_template_id.into(),
            user_content: String::new(),
            generated_content: None,
            generating: false,
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Enter the generating state. Fails if a generation is already pending.
    pub fn begin_generation(&mut self) -> Result<(), AppError> {
        if self.generating {
            return Err(AppError::GenerationInProgress);
        }
        self.generating = true;
        Ok(())
    }

    pub fn finish_generation(&mut self) {
        self.generating = false;
    }

    /// Point the selection at the default template if it was `removed_id`.
    /// Returns whether the selection changed.
    pub fn forget_template(&mut self, removed_id: &str, catalog: &TemplateCatalog) -> bool {
        if self.selected_template_id != removed_id {
            return false;
        }
        self.selected_template_id = catalog.default_template().id.clone();
        true
    }

    /// Bring back the input and output of a history entry.
    pub fn restore(&mut self, entry: &HistoryEntry, catalog: &TemplateCatalog) -> RestoreOutcome {
        let template_restored = catalog.contains(&entry.template_id);
        if template_restored {
            self.selected_template_id = entry.template_id.clone();
        }
        self.user_content = entry.user_content.clone();
        self.generated_content = Some(entry.generated_content.clone());
        RestoreOutcome { template_restored }
    }

    /// Load the code sample, selecting the direct-message template when available.
    pub fn load_sample(&mut self, catalog: &TemplateCatalog) {
        if catalog.contains(SAMPLE_TEMPLATE_ID) {
            self.selected_template_id = SAMPLE_TEMPLATE_ID.to_string();
        }
        self.user_content = SAMPLE_CONTENT.to_string();
    }

    pub fn clear(&mut self) {
        self.user_content.clear();
        self.generated_content = None;
    }
}
