//! Session model - the complete state of one editing session
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. [`Session`] owns the editable fields, the undo history, the
//! open picker (if any), the preset store and UI state; nothing else holds
//! a reference to the live document.

pub mod fields;
pub mod history;
pub mod picker;
pub mod ui;

pub use fields::{ColorField, EditorFields, MetaField};
pub use history::{Suppressed, UndoHistory, MAX_UNDO_DEPTH};
pub use picker::{
    harmony_ramp, PickerPhase, PickerReadout, PickerSession, SliderChannel, HARMONY_STEPS,
};
pub use ui::{
    candidate_title, CandidateList, StatusMessage, StatusTone, UiMode, UiState, UI_MODE_KEY,
};

use crate::color::{hsl_to_hex, normalize_hex};
use crate::presets::PresetStore;
use crate::theme::{MetaKey, PaletteTarget, ThemeDocument};

/// Identifies one request sent to the theme source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RequestId(pub u64);

/// Tracks which load request is the latest, so older responses are dropped
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    next: u64,
    pending_load: Option<RequestId>,
}

impl RequestTracker {
    /// Start a new load, superseding any in flight
    pub fn begin_load(&mut self) -> RequestId {
        self.next += 1;
        let id = RequestId(self.next);
        self.pending_load = Some(id);
        id
    }

    /// Finish a load; returns false if `id` was superseded
    pub fn finish_load(&mut self, id: RequestId) -> bool {
        if self.pending_load == Some(id) {
            self.pending_load = None;
            true
        } else {
            false
        }
    }

    pub fn pending_load(&self) -> Option<RequestId> {
        self.pending_load
    }
}

/// The live editing state for one loaded theme
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Editable field surface (the live document)
    pub fields: EditorFields,
    /// Undo snapshots and committed baseline
    pub history: UndoHistory,
    /// Open color picker, if any
    pub picker: Option<PickerSession>,
    /// Built-in and user preset colors
    pub presets: PresetStore,
    /// Status line, UI mode, theme candidates
    pub ui: UiState,
    /// Load request supersession
    pub requests: RequestTracker,
}

impl Session {
    pub fn new(presets: PresetStore, mode: UiMode) -> Self {
        let mut session = Self {
            presets,
            ..Self::default()
        };
        session.ui.mode = mode;
        session
    }

    /// Replace the document wholesale; history starts over
    pub fn load(&mut self, doc: ThemeDocument) {
        self.picker = None;
        {
            let _guard = self.history.suppress();
            self.fields.apply(doc);
        }
        self.history.clear();
        self.commit();
    }

    /// Current document as read back from the fields
    pub fn read_values(&self) -> Option<ThemeDocument> {
        self.fields.read_values()
    }

    /// Snapshot the committed baseline before a mutation
    pub fn push_undo(&mut self) -> bool {
        self.history.push_undo()
    }

    /// Make the current fields the baseline for the next snapshot
    pub fn commit(&mut self) {
        self.history.commit(self.fields.read_values());
    }

    /// Restore the most recent snapshot; false if there is none
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        {
            let _guard = self.history.suppress();
            self.fields.apply(previous);
        }
        // An open picker follows the restored value and starts a fresh edit
        if let Some(picker) = self.picker.as_mut() {
            if let Some(current) = self.fields.color_text(&picker.target) {
                picker.sync(current);
            }
            picker.phase = PickerPhase::Idle;
        }
        self.commit();
        true
    }

    /// Direct edit of a metadata field
    pub fn edit_meta(&mut self, key: MetaKey, text: impl Into<String>) -> bool {
        if !self.fields.is_loaded() {
            return false;
        }
        self.push_undo();
        self.fields.set_meta_text(key, text);
        self.commit();
        true
    }

    /// Direct edit of a palette field; returns the normalized value
    pub fn edit_color(&mut self, target: &PaletteTarget, text: &str) -> Option<String> {
        if !self.fields.has_color(target) {
            return None;
        }
        self.push_undo();
        let normalized = self.fields.set_color_text(target, text);
        self.commit();
        normalized
    }

    /// Bind the picker to a palette entry; false if the entry does not exist
    pub fn open_picker(&mut self, target: PaletteTarget) -> bool {
        let Some(current) = self.fields.color_text(&target).map(str::to_string) else {
            return false;
        };
        if self.picker.is_some() {
            self.close_picker();
        }
        tracing::debug!("Opening picker on {}", target);
        self.picker = Some(PickerSession::open(target, &current));
        true
    }

    /// Close the picker; commits if anything was edited while open
    pub fn close_picker(&mut self) -> bool {
        let Some(picker) = self.picker.take() else {
            return false;
        };
        if picker.is_editing() {
            self.commit();
        }
        true
    }

    pub fn picker_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Apply a color to the picker's target
    ///
    /// The first color change after opening records one undo snapshot;
    /// later ones only move the committed baseline.
    pub fn apply_picker_color(&mut self, input: &str) -> Option<String> {
        let picker = self.picker.as_mut()?;
        let normalized = normalize_hex(input);

        if picker.begin_edit() {
            self.history.push_undo();
        }
        self.fields.set_color_text(&picker.target, &normalized);
        picker.sync(&normalized);

        self.commit();
        Some(normalized)
    }

    /// Move one slider; the other two are read from the current readout
    pub fn picker_slider(&mut self, channel: SliderChannel, value: u16) -> Option<String> {
        let hsl = self.picker.as_ref()?.readout.with_slider(channel, value);
        self.apply_picker_color(&hsl_to_hex(hsl))
    }

    /// Apply the preset at `index` of the preset list
    pub fn apply_preset(&mut self, index: usize) -> Option<String> {
        if self.picker.is_none() {
            return None;
        }
        let color = self.presets.get(index)?;
        self.apply_picker_color(&color)
    }

    /// Apply the harmony swatch at `index`
    pub fn apply_harmony(&mut self, index: usize) -> Option<String> {
        let color = self.picker.as_ref()?.readout.harmony.get(index)?.clone();
        self.apply_picker_color(&color)
    }

    /// Save the picker's current color as a preset
    ///
    /// Returns false if no picker is open or the color is already a preset.
    pub fn add_current_preset(&mut self) -> bool {
        let Some(picker) = &self.picker else {
            return false;
        };
        let hex = picker.readout.hex.clone();
        self.presets.add(&hex)
    }

    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.set_status(text, tone);
    }
}
