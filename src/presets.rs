//! Preset colors
//!
//! A fixed set of built-in swatches followed by colors the user saved.
//! User presets are global (not per theme) and persisted in the local
//! key-value store, newest first.

use serde_json::Value;

use crate::color::normalize_hex;
use crate::storage::KeyValueStore;

/// Storage key for user presets
pub const PRESETS_KEY: &str = "themeTweakerPresets";

/// Maximum number of stored user presets
pub const MAX_USER_PRESETS: usize = 60;

/// Built-in presets, always listed first
pub const DEFAULT_PRESETS: [&str; 11] = [
    "#FF6B00", "#FFB347", "#FFD166", "#06D6A0", "#4DA3FF", "#118AB2", "#073B4C", "#F15BB5",
    "#9B5DE5", "#FFFFFF", "#101018",
];

/// Ordered, deduplicated preset list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetStore {
    /// User presets, newest first; never contains built-ins
    user: Vec<String>,
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored user presets
    pub fn from_user(colors: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut user: Vec<String> = Vec::new();
        for color in colors {
            let hex = normalize_hex(color.as_ref());
            if !is_default(&hex) && !user.contains(&hex) {
                user.push(hex);
            }
        }
        user.truncate(MAX_USER_PRESETS);
        Self { user }
    }

    /// Load user presets from the store; unreadable values start empty
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(PRESETS_KEY) {
            Some(Value::Array(items)) => {
                Self::from_user(items.iter().filter_map(Value::as_str))
            }
            Some(other) => {
                tracing::warn!("Ignoring malformed preset list: {}", other);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Built-ins followed by user presets, first occurrence wins
    pub fn list(&self) -> Vec<String> {
        let mut unique: Vec<String> = Vec::with_capacity(DEFAULT_PRESETS.len() + self.user.len());
        for hex in DEFAULT_PRESETS
            .iter()
            .map(|color| normalize_hex(color))
            .chain(self.user.iter().cloned())
        {
            if !unique.contains(&hex) {
                unique.push(hex);
            }
        }
        unique
    }

    /// Preset at a position of `list()`
    pub fn get(&self, index: usize) -> Option<String> {
        self.list().into_iter().nth(index)
    }

    /// Add a color to the front of the user presets
    ///
    /// Returns false (and changes nothing) if the color is already listed.
    pub fn add(&mut self, color: &str) -> bool {
        let hex = normalize_hex(color);
        if self.list().contains(&hex) {
            return false;
        }
        self.user.insert(0, hex);
        self.user.truncate(MAX_USER_PRESETS);
        true
    }

    pub fn user_presets(&self) -> &[String] {
        &self.user
    }

    /// Value written to the key-value store
    pub fn to_value(&self) -> Value {
        Value::Array(self.user.iter().cloned().map(Value::String).collect())
    }
}

fn is_default(hex: &str) -> bool {
    DEFAULT_PRESETS.contains(&hex)
}
