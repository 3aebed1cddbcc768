use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard.
///
/// Opening the clipboard fails on headless machines, so callers create this
/// only when a copy is actually requested.
pub struct SystemClipboard {
    inner: Clipboard,
}

impl SystemClipboard {
    pub fn open() -> Result<Self, AppError> {
        Clipboard::new().map(|inner| Self { inner }).map_err(clipboard_error)
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.inner.set_text(text.to_owned()).map_err(clipboard_error)?;
        log::debug!("Copied {} characters to the clipboard", text.chars().count());
        Ok(())
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardError(err.to_string())
}
