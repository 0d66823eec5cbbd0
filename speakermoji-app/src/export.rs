//! Clipboard and file export of the transformed transcript.
//!
//! Both are user-triggered side effects outside the session's recompute path.
//! Callers never see their errors directly: failures become notifications.

use std::fs;
use std::path::Path;

use thiserror::Error;

pub const COPY_SUCCESS: &str = "Copied to clipboard!";
pub const COPY_FAILURE: &str = "Failed to copy to clipboard";
pub const SAVE_SUCCESS: &str = "Transcript saved!";
pub const SAVE_FAILURE: &str = "Failed to save transcript";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for clipboard exports.
pub trait ClipboardSink: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> Result<(), ExportError>;
}

/// The OS clipboard via `arboard`.
///
/// A fresh `arboard::Clipboard` is opened per write; it is `!Sync` on some
/// platforms and the export runs on the blocking pool.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ExportError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ExportError::Clipboard(e.to_string()))
    }
}

/// Write `text` to `path` as UTF-8 plain text, creating parent directories.
pub fn save_text(path: &Path, text: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_text_writes_utf8_and_creates_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("chat.txt");
        save_text(&path, "🙂: שלום").expect("save");
        assert_eq!(fs::read_to_string(&path).expect("read back"), "🙂: שלום");
    }

    #[test]
    fn save_text_into_a_file_path_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").expect("write blocker");
        let err = save_text(&blocker.join("chat.txt"), "hi").unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
