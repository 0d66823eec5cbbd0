//! Operations invoked from the command line and the interactive loop.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use speakermoji_core::TokenAssignment;
use tracing::{info, warn};

use crate::export::{self, COPY_FAILURE, COPY_SUCCESS, SAVE_FAILURE, SAVE_SUCCESS};
use crate::notify::ToastKind;
use crate::state::AppState;
use crate::theme::Theme;

/// Drop a leading byte-order mark so the first header still starts its line.
pub fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{FEFF}') {
        Some(rest) => rest.to_string(),
        None => text,
    }
}

/// Read a transcript file as UTF-8 without its byte-order mark.
pub fn read_transcript_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path).map(strip_bom)
}

/// Replace the transcript; speakers, output and direction are re-derived.
pub fn load_transcript(state: &mut AppState, text: impl Into<String>) {
    state.session.set_transcript(text);
    info!(
        speakers = state.session.speakers().len(),
        direction = state.session.direction().as_str(),
        "transcript loaded"
    );
}

/// Apply a `NAME=TOKEN` assignment to the current transcript.
pub fn assign_token(state: &mut AppState, raw: &str) -> Result<(), String> {
    let assignment = raw
        .parse::<TokenAssignment>()
        .map_err(|e| e.to_string())?;
    state
        .session
        .set_token(&assignment.name, assignment.token)
        .map_err(|e| e.to_string())
}

/// Start a clipboard write of the current output. Fire-and-forget.
pub fn copy_output(state: &mut AppState) {
    let text = state.session.output().to_string();
    let clipboard = Arc::clone(&state.clipboard);
    let notifier = Arc::clone(&state.notifier);
    let handle = tokio::task::spawn_blocking(move || {
        let result = clipboard.write_text(&text);
        let mut notifier = notifier.lock();
        match result {
            Ok(()) => {
                info!(bytes = text.len(), "output copied to clipboard");
                notifier.success(COPY_SUCCESS);
            }
            Err(e) => {
                warn!(error = %e, "clipboard export failed");
                notifier.error(COPY_FAILURE);
            }
        }
    });
    state.pending_exports.push(handle);
}

/// Start a file save of the current output. Fire-and-forget.
///
/// `None` saves to the default export file name in the export directory.
pub fn save_output(state: &mut AppState, path: Option<PathBuf>) {
    let path = path.unwrap_or_else(|| state.default_export_path());
    let text = state.session.output().to_string();
    let notifier = Arc::clone(&state.notifier);
    let handle = tokio::task::spawn_blocking(move || {
        let result = export::save_text(&path, &text);
        let mut notifier = notifier.lock();
        match result {
            Ok(()) => {
                info!(path = %path.display(), bytes = text.len(), "output saved");
                notifier.success(SAVE_SUCCESS);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "file export failed");
                notifier.error(SAVE_FAILURE);
            }
        }
    });
    state.pending_exports.push(handle);
}

/// Wait for every export started so far.
pub async fn flush_exports(state: &mut AppState) {
    for handle in state.pending_exports.drain(..) {
        if let Err(e) = handle.await {
            warn!(error = %e, "export task did not complete");
        }
    }
}

pub fn toggle_theme(state: &mut AppState) -> Theme {
    state.theme = state.theme.toggle();
    state.theme
}

/// Speaker list as `token  name` lines.
pub fn render_speakers(state: &AppState) -> String {
    let speakers = state.session.speakers();
    if speakers.is_empty() {
        return "no speakers found".into();
    }
    speakers
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>2}. {}  {}", i + 1, s.token, s.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Output prefixed with a themed status line.
///
/// Right-to-left output is wrapped in RLE…PDF marks so terminals that
/// honour bidi controls lay it out correctly.
pub fn render_output(state: &AppState) -> String {
    let direction = state.session.direction();
    let status = format!(
        "── {} speakers · {} ──",
        state.session.speakers().len(),
        direction.as_str()
    );
    let body = if direction.is_rtl() {
        format!("\u{202B}{}\u{202C}", state.session.output())
    } else {
        state.session.output().to_string()
    };
    format!("{}\n{}", state.theme.accent(&status), body)
}

/// Visible notifications rendered one per line, pruning expired ones.
pub fn render_toasts(state: &AppState) -> Option<String> {
    let toasts = state.notifier.lock().active(Instant::now());
    if toasts.is_empty() {
        return None;
    }
    Some(
        toasts
            .iter()
            .map(|t| match t.kind {
                ToastKind::Success => state.theme.accent(&t.message),
                ToastKind::Error => state.theme.error(&t.message),
            })
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
