//! Dark/light display preference.
//!
//! Cosmetic only: it picks the ANSI colours used for headers and
//! notifications. The runtime toggle is never written back to settings.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// Resolve the theme from the settings value and the host environment.
    pub fn from_host(setting: &str) -> Self {
        Self::resolve(
            setting,
            std::env::var("SPEAKERMOJI_THEME").ok().as_deref(),
            std::env::var("COLORFGBG").ok().as_deref(),
        )
    }

    /// Precedence: explicit setting, `SPEAKERMOJI_THEME`, `COLORFGBG`, dark.
    pub fn resolve(setting: &str, env_theme: Option<&str>, colorfgbg: Option<&str>) -> Self {
        if let Some(theme) = Self::parse(setting) {
            return theme;
        }
        if let Some(theme) = env_theme.and_then(Self::parse) {
            return theme;
        }
        colorfgbg.and_then(Self::from_colorfgbg).unwrap_or(Theme::Dark)
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// `COLORFGBG` is `fg;bg` (sometimes `fg;x;bg`); background colours 0–6
    /// and 8 are dark.
    fn from_colorfgbg(raw: &str) -> Option<Self> {
        let bg: u8 = raw.rsplit(';').next()?.trim().parse().ok()?;
        Some(if bg <= 6 || bg == 8 {
            Theme::Dark
        } else {
            Theme::Light
        })
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Wrap `text` in the accent colour for this theme.
    pub fn accent(self, text: &str) -> String {
        let code = match self {
            Theme::Dark => "1;96",
            Theme::Light => "1;34",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }

    pub fn error(self, text: &str) -> String {
        let code = match self {
            Theme::Dark => "1;91",
            Theme::Light => "1;31",
        };
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}
