//! UI state - status message, UI mode and the theme candidate list

use std::fmt;

/// Storage key for the UI mode flag
pub const UI_MODE_KEY: &str = "uiTheme";

/// Tone of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusTone {
    #[default]
    Neutral,
    Ok,
    Warn,
    Error,
}

impl StatusTone {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusTone::Neutral => "",
            StatusTone::Ok => "ok",
            StatusTone::Warn => "warn",
            StatusTone::Error => "error",
        }
    }
}

/// Message shown in the status line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub tone: StatusTone,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Light or dark chrome for the editor itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Light,
    Dark,
}

impl UiMode {
    /// Anything other than "dark" reads as light
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("dark") {
            UiMode::Dark
        } else {
            UiMode::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UiMode::Light => "light",
            UiMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UiMode::Light => UiMode::Dark,
            UiMode::Dark => UiMode::Light,
        }
    }
}

impl fmt::Display for UiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme files found by the last scan
#[derive(Debug, Clone, Default)]
pub struct CandidateList {
    pub paths: Vec<String>,
    /// Case-insensitive substring filter
    pub filter: String,
}

impl CandidateList {
    /// Paths matching the current filter, in scan order
    pub fn filtered(&self) -> Vec<&str> {
        let filter = self.filter.to_lowercase();
        self.paths
            .iter()
            .filter(|path| path.to_lowercase().contains(&filter))
            .map(String::as_str)
            .collect()
    }
}

/// Short display title: the last two path components
pub fn candidate_title(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();
    let start = parts.len().saturating_sub(2);
    let title = parts[start..].join("/");
    if title.is_empty() {
        path.to_string()
    } else {
        title
    }
}

/// UI state - status line, mode flag, candidates
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub status: StatusMessage,
    pub mode: UiMode,
    pub candidates: CandidateList,
    /// Active theme path as reported by the provider
    pub active_path: String,
    /// Whether a load is in flight
    pub is_loading: bool,
    /// Whether a save is in flight
    pub is_saving: bool,
    /// An upload is still switching path, reloading and rescanning
    pub upload_pending: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.status = StatusMessage::new(text, tone);
    }

    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_saving
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_mode_parse() {
        assert_eq!(UiMode::parse("dark"), UiMode::Dark);
        assert_eq!(UiMode::parse("DARK "), UiMode::Dark);
        assert_eq!(UiMode::parse("light"), UiMode::Light);
        assert_eq!(UiMode::parse("solarized"), UiMode::Light);
    }

    #[test]
    fn test_candidate_title() {
        assert_eq!(candidate_title("/home/a/themes/KAV/theme.json"), "KAV/theme.json");
        assert_eq!(candidate_title("theme.json"), "theme.json");
        assert_eq!(candidate_title(""), "");
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let list = CandidateList {
            paths: vec!["/t/Ocean/theme.json".into(), "/t/forest/theme.json".into()],
            filter: "OCEAN".into(),
        };
        assert_eq!(list.filtered(), vec!["/t/Ocean/theme.json"]);
    }
}
