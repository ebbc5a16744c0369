//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::{RequestId, SliderChannel, StatusTone, UiMode};
use crate::theme::{MetaKey, PaletteTarget, ThemeDocument};

/// Direct field edits and undo
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Metadata text field changed
    SetMeta { key: MetaKey, text: String },
    /// Palette text field changed (normalized on entry)
    SetColor { target: PaletteTarget, text: String },
    /// Restore the most recent snapshot
    Undo,
}

/// Color picker messages
#[derive(Debug, Clone)]
pub enum PickerMsg {
    /// Swatch clicked: open the picker on this entry
    Open(PaletteTarget),
    /// Picker hex text edited
    HexInput(String),
    /// Native color input changed
    NativeInput(String),
    /// One HSL slider moved
    Slider { channel: SliderChannel, value: u16 },
    /// Preset swatch clicked (index into the preset list)
    Preset(usize),
    /// Harmony swatch clicked (index into the ramp)
    Harmony(usize),
    /// Save the current color as a preset
    AddPreset,
    /// Close control or click outside the picker
    Close,
}

/// Application-level messages (theme source I/O and completions)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Reload the active theme
    Load,
    /// Save the current document
    Save,
    /// List candidate theme files
    Scan,
    /// Upload a local file as a new theme
    Upload(PathBuf),
    /// Ask for the active path
    FetchPath,
    /// Switch the active path
    SetPath(String),
    /// Switch to a candidate from the filtered list
    OpenCandidate(usize),

    /// Load finished (async result)
    LoadCompleted {
        request: RequestId,
        result: Result<ThemeDocument, String>,
    },
    /// Save finished (async result)
    SaveCompleted(Result<(), String>),
    /// Scan finished (async result)
    ScanCompleted(Result<Vec<String>, String>),
    /// Upload finished with the stored path (async result)
    UploadCompleted(Result<String, String>),
    /// Active path reported by the provider
    PathFetched(String),
    /// Path switch finished with the effective path (async result)
    PathSet(Result<String, String>),

    /// Quit the application
    Quit,
}

/// UI messages (status, mode flag, candidate filter)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Set the status line
    SetStatus { text: String, tone: StatusTone },
    /// Set the UI mode and persist it
    SetMode(UiMode),
    /// Flip between light and dark
    ToggleMode,
    /// Filter the candidate list
    FilterCandidates(String),
    /// Redraw without changing anything
    Show,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Field edits and undo
    Document(DocumentMsg),
    /// Color picker
    Picker(PickerMsg),
    /// Theme source I/O
    App(AppMsg),
    /// Status, mode and candidates
    Ui(UiMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn set_color(target: PaletteTarget, text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::SetColor {
            target,
            text: text.into(),
        })
    }

    pub fn set_meta(key: MetaKey, text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::SetMeta {
            key,
            text: text.into(),
        })
    }

    pub fn undo() -> Self {
        Msg::Document(DocumentMsg::Undo)
    }

    pub fn status(text: impl Into<String>, tone: StatusTone) -> Self {
        Msg::Ui(UiMsg::SetStatus {
            text: text.into(),
            tone,
        })
    }
}
