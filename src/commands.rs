//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Theme source commands report back with an `AppMsg` completion.

use std::path::PathBuf;

use serde_json::Value;

use crate::model::RequestId;
use crate::theme::ThemeDocument;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the view
    Redraw,
    /// Load the active theme; replies `AppMsg::LoadCompleted`
    LoadTheme { request: RequestId },
    /// Save a document; replies `AppMsg::SaveCompleted`
    SaveTheme { doc: ThemeDocument },
    /// List candidate themes; replies `AppMsg::ScanCompleted`
    ScanThemes,
    /// Read a local file and upload it; replies `AppMsg::UploadCompleted`
    UploadTheme { source: PathBuf },
    /// Ask for the active path; replies `AppMsg::PathFetched`
    FetchPath,
    /// Switch the active path; replies `AppMsg::PathSet`
    SetPath { path: String },
    /// Write a value to the local key-value store
    StoreValue { key: String, value: Value },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Completions redraw when they arrive
            Cmd::LoadTheme { .. }
            | Cmd::SaveTheme { .. }
            | Cmd::ScanThemes
            | Cmd::UploadTheme { .. }
            | Cmd::FetchPath
            | Cmd::SetPath { .. } => true,
            Cmd::StoreValue { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            Cmd::Quit => false,
        }
    }

    /// Flatten nested batches into a list (empty for `None`)
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_batches() {
        let cmd = Cmd::batch(vec![
            Cmd::Redraw,
            Cmd::None,
            Cmd::batch(vec![Cmd::ScanThemes, Cmd::FetchPath]),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![Cmd::Redraw, Cmd::ScanThemes, Cmd::FetchPath]
        );
    }

    #[test]
    fn test_store_value_alone_does_not_redraw() {
        let cmd = Cmd::StoreValue {
            key: "k".into(),
            value: Value::Null,
        };
        assert!(!cmd.needs_redraw());
        assert!(Cmd::batch(vec![cmd, Cmd::Redraw]).needs_redraw());
    }
}
