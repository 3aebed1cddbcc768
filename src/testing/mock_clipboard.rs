use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// Mock clipboard for testing.
#[derive(Debug, Default)]
pub struct MockClipboard {
    pub written_text: Option<String>,
    pub should_fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { written_text: None, should_fail: true }
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if self.should_fail {
            return Err(AppError::ClipboardError("Mock clipboard error".to_string()));
        }
        self.written_text = Some(text.to_string());
        Ok(())
    }
}
