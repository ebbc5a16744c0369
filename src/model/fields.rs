//! Editable field surface
//!
//! Holds the text of every metadata input and palette input, as the user
//! currently sees it. `read_values` folds that text back over a copy of the
//! last applied document, so keys that have no field survive untouched.

use crate::color::normalize_hex;
use crate::theme::{MetaKey, PaletteTarget, Section, ThemeDocument};

/// One metadata input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaField {
    pub key: MetaKey,
    pub text: String,
}

/// One palette input (always holds normalized text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorField {
    pub target: PaletteTarget,
    pub text: String,
}

/// The set of editable fields rendered for the current document
#[derive(Debug, Clone, Default)]
pub struct EditorFields {
    /// Document most recently applied to the fields
    applied: Option<ThemeDocument>,
    meta: Vec<MetaField>,
    colors: Vec<ColorField>,
}

impl EditorFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document has been applied yet
    pub fn is_loaded(&self) -> bool {
        self.applied.is_some()
    }

    /// Rebuild all fields from a document
    pub fn apply(&mut self, doc: ThemeDocument) {
        self.meta = MetaKey::ALL
            .into_iter()
            .map(|key| MetaField {
                key,
                text: doc.metadata.get(key).to_string(),
            })
            .collect();

        self.colors = Section::ALL
            .into_iter()
            .flat_map(|section| {
                doc.palette(section).iter().map(move |(key, value)| ColorField {
                    target: PaletteTarget::new(section, key.clone()),
                    text: normalize_hex(value),
                })
            })
            .collect();

        tracing::debug!(
            meta = self.meta.len(),
            colors = self.colors.len(),
            "Applied document to fields"
        );
        self.applied = Some(doc);
    }

    /// Reconstruct a fresh document from the current field text
    ///
    /// Returns `None` before any document has been applied.
    pub fn read_values(&self) -> Option<ThemeDocument> {
        let mut doc = self.applied.clone()?;
        for field in &self.meta {
            doc.metadata.set(field.key, field.text.clone());
        }
        for field in &self.colors {
            doc.palette_mut(field.target.section)
                .insert(field.target.key.clone(), normalize_hex(&field.text));
        }
        Some(doc)
    }

    pub fn meta_fields(&self) -> &[MetaField] {
        &self.meta
    }

    pub fn color_fields(&self) -> &[ColorField] {
        &self.colors
    }

    /// Color fields of one section, in document order
    pub fn section_fields(&self, section: Section) -> impl Iterator<Item = &ColorField> {
        self.colors
            .iter()
            .filter(move |field| field.target.section == section)
    }

    pub fn meta_text(&self, key: MetaKey) -> Option<&str> {
        self.meta
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.text.as_str())
    }

    pub fn color_text(&self, target: &PaletteTarget) -> Option<&str> {
        self.colors
            .iter()
            .find(|field| &field.target == target)
            .map(|field| field.text.as_str())
    }

    pub fn has_color(&self, target: &PaletteTarget) -> bool {
        self.colors.iter().any(|field| &field.target == target)
    }

    /// Replace the text of a metadata field
    pub fn set_meta_text(&mut self, key: MetaKey, text: impl Into<String>) -> bool {
        match self.meta.iter_mut().find(|field| field.key == key) {
            Some(field) => {
                field.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Normalize and store the text of a palette field
    ///
    /// Returns the normalized value, or `None` if no such field exists.
    pub fn set_color_text(&mut self, target: &PaletteTarget, text: &str) -> Option<String> {
        let field = self.colors.iter_mut().find(|field| &field.target == target)?;
        field.text = normalize_hex(text);
        Some(field.text.clone())
    }
}
