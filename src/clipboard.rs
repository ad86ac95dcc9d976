// Clipboard access for snippet copying.
// Runs off the render thread; failures are logged rather than surfaced.

use arboard::Clipboard;
use tracing::{error, warn};

#[derive(Clone, Default)]
pub struct ClipboardService {}

impl ClipboardService {
    pub fn new() -> Self {
        Self {}
    }

    /// Copy text to the system clipboard.
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        tokio::task::spawn_blocking(move || match Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    error!("Failed to set clipboard text: {}", e);
                }
            }
            Err(e) => {
                warn!("Failed to initialize clipboard for copy: {}", e);
            }
        });
    }
}
