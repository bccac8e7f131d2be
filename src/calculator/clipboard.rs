//! Clipboard functionality for copying calculator results.

use super::format::is_special;
use arboard::Clipboard;
use thiserror::Error;

/// Reasons a result could not be copied.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),
    #[error("Failed to copy to clipboard: {0}")]
    Copy(#[source] arboard::Error),
    #[error("Refusing to copy non-numeric result: {0}")]
    NotANumber(String),
}

/// Copy the displayed result to the system clipboard.
///
/// Only finite values are copied; `Infinity` and `NaN` are refused.
pub fn copy_result(display: &str) -> Result<(), ClipboardError> {
    check_copyable(display)?;

    let mut clipboard = Clipboard::new().map_err(ClipboardError::Access)?;

    clipboard
        .set_text(display.to_string())
        .map_err(ClipboardError::Copy)
}

fn check_copyable(display: &str) -> Result<(), ClipboardError> {
    if is_special(display) {
        return Err(ClipboardError::NotANumber(display.to_string()));
    }
    Ok(())
}
