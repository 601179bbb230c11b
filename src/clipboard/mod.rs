use anyhow::{Context, Result, bail};
use arboard::Clipboard;

// Cap on a single copied message body.
const MAX_COPY_BYTES: usize = 1024 * 1024;

/// Clipboard backend, separated so tests run without a system clipboard.
trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard(Clipboard);

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.0.set_text(text).context("Failed to write to the system clipboard")
    }
}

fn copy_with_backend(text: &str, backend: &mut dyn ClipboardBackend) -> Result<()> {
    if text.is_empty() {
        bail!("Nothing to copy: message body is empty");
    }
    if text.len() > MAX_COPY_BYTES {
        bail!("Message too large to copy ({} bytes, max {})", text.len(), MAX_COPY_BYTES);
    }
    backend.set_text(text)
}

/// Copy a message body to the system clipboard.
///
/// Fails when the body is empty, oversized, or no clipboard is available
/// (headless environments).
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
    copy_with_backend(text, &mut SystemClipboard(clipboard))
}
