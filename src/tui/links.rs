//! Opening and copying reference links.

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Outcome of trying to open a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Handed to the system opener
    Opened,
    /// Opener failed; the URL was copied to the clipboard instead
    Copied,
}

/// Opens `url` with the system opener, falling back to the clipboard.
///
/// # Errors
///
/// Returns an error only if both the opener and the clipboard fail.
pub fn open_or_copy(url: &str) -> Result<LinkOutcome> {
    match open::that(url) {
        Ok(()) => {
            debug!(url, "Opened link");
            Ok(LinkOutcome::Opened)
        }
        Err(error) => {
            warn!(url, %error, "Failed to open link, copying instead");
            copy_to_clipboard(url)?;
            Ok(LinkOutcome::Copied)
        }
    }
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is available.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    arboard::Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
        .context("Failed to copy to clipboard")
}
