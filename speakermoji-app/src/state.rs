//! Application state shared by the CLI and the interactive loop.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use speakermoji_core::TranscriptSession;
use tokio::task::JoinHandle;

use crate::export::ClipboardSink;
use crate::notify::Notifier;
use crate::settings::AppSettings;
use crate::theme::Theme;

pub struct AppState {
    /// Transcript, speaker tokens and derived output.
    pub session: TranscriptSession,
    /// Current display theme. Starts from the host preference.
    pub theme: Theme,
    /// Transient notifications. Shared with in-flight export tasks.
    pub notifier: Arc<Mutex<Notifier>>,
    /// Effective settings after normalisation.
    pub settings: AppSettings,
    /// Directory the default export file name is resolved against.
    pub export_dir: PathBuf,
    /// Clipboard backend used by `copy`.
    pub clipboard: Arc<dyn ClipboardSink>,
    /// Export tasks started but not yet awaited.
    pub pending_exports: Vec<JoinHandle<()>>,
}

impl AppState {
    pub fn new(settings: AppSettings, clipboard: Arc<dyn ClipboardSink>) -> Self {
        let theme = Theme::from_host(&settings.theme);
        let notifier = Notifier::new(Duration::from_millis(settings.toast_duration_ms));
        Self {
            session: TranscriptSession::new(settings.palette()),
            theme,
            notifier: Arc::new(Mutex::new(notifier)),
            settings,
            export_dir: PathBuf::from("."),
            clipboard,
            pending_exports: Vec::new(),
        }
    }

    /// Path used when `save` is requested without an explicit destination.
    pub fn default_export_path(&self) -> PathBuf {
        self.export_dir.join(&self.settings.export_file_name)
    }
}
