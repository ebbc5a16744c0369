//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! undo history and picker state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,history=debug` - scoped filtering
//! - `RUST_LOG=theme_tweaker::provider=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/theme-tweaker/logs/theme-tweaker.log` with
//! daily rotation. File logging uses debug level for troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{PickerPhase, Session};

/// Initialize tracing subscriber with console and (optionally) file logging
///
/// Console output goes to stderr, since stdout carries the editor view, and
/// respects RUST_LOG (default `warn`).
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of history/picker state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub undo_depth: usize,
    pub picker: Option<PickerInfo>,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerInfo {
    pub target: String,
    pub editing: bool,
    pub hex: String,
}

impl SessionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        Self {
            undo_depth: session.history.len(),
            picker: session.picker.as_ref().map(|p| PickerInfo {
                target: p.target.to_string(),
                editing: p.phase == PickerPhase::Editing,
                hex: p.readout.hex.clone(),
            }),
            loaded: session.fields.is_loaded(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SessionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.loaded != other.loaded {
            changes.push(format!("loaded: {} → {}", self.loaded, other.loaded));
        }
        if self.undo_depth != other.undo_depth {
            changes.push(format!(
                "undo depth: {} → {}",
                self.undo_depth, other.undo_depth
            ));
        }

        match (&self.picker, &other.picker) {
            (None, Some(after)) => changes.push(format!("picker opened on {}", after.target)),
            (Some(before), None) => changes.push(format!("picker closed on {}", before.target)),
            (Some(before), Some(after)) => {
                if before.target != after.target {
                    changes.push(format!("picker: {} → {}", before.target, after.target));
                }
                if before.editing != after.editing {
                    let phase = if after.editing { "editing" } else { "idle" };
                    changes.push(format!("picker {}", phase));
                }
                if before.hex != after.hex {
                    changes.push(format!("color: {} → {}", before.hex, after.hex));
                }
            }
            (None, None) => {}
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{PaletteTarget, Section, ThemeDocument};

    #[test]
    fn test_diff_reports_picker_and_depth() {
        let mut session = Session::default();
        session.load(
            ThemeDocument::from_json(r##"{"dark": {"bg": "#000000"}, "light": {}}"##).unwrap(),
        );
        let before = SessionSnapshot::from_session(&session);
        assert_eq!(before.diff(&before.clone()), None);

        session.open_picker(PaletteTarget::new(Section::Dark, "bg"));
        session.apply_picker_color("#FF0000");
        let after = SessionSnapshot::from_session(&session);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("undo depth: 0 → 1"));
        assert!(diff.contains("picker opened on dark.bg"));
    }
}
