//! Persistent application settings (JSON file in the user config directory).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use speakermoji_core::{tokens::palette::DEFAULT_TOKENS, Palette};

pub const DEFAULT_EXPORT_FILE_NAME: &str = "speakermoji-transcript.txt";
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AppSettings {
    /// `"system"`, `"dark"` or `"light"`.
    pub theme: String,
    pub palette: Vec<String>,
    pub export_file_name: String,
    pub toast_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "system".into(),
            palette: DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            export_file_name: DEFAULT_EXPORT_FILE_NAME.into(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl AppSettings {
    pub fn normalize(&mut self) {
        self.theme = normalize_theme(&self.theme);
        self.palette = normalize_palette(&self.palette);
        self.toast_duration_ms = self.toast_duration_ms.clamp(500, 30_000);
        let name = self.export_file_name.trim();
        self.export_file_name = if name.is_empty() {
            DEFAULT_EXPORT_FILE_NAME.into()
        } else {
            name.into()
        };
    }

    /// Palette built from settings, falling back to the built-in tokens.
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.iter().cloned()).unwrap_or_default()
    }
}

pub fn normalize_theme(raw: &str) -> String {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dark" => "dark".into(),
        "light" => "light".into(),
        _ => "system".into(),
    }
}

fn normalize_palette(raw: &[String]) -> Vec<String> {
    let out: Vec<String> = raw
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if out.is_empty() {
        DEFAULT_TOKENS.iter().map(|t| t.to_string()).collect()
    } else {
        out
    }
}

pub fn default_settings_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("speakermoji")
            .join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
                    .join(".config")
            })
            .join("speakermoji")
            .join("settings.json")
    }
}

pub fn load_settings(path: &Path) -> AppSettings {
    let mut settings = fs::read_to_string(path)
        .ok()
        .and_then(|raw| serde_json::from_str::<AppSettings>(&raw).ok())
        .unwrap_or_default();
    settings.normalize();
    settings
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, json)
}
