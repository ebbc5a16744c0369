//! Theme document model
//!
//! A theme file is a flat JSON object: metadata strings at the top level,
//! a `dark` and a `light` palette mapping token names to hex colors, and
//! any other keys, which are carried through untouched.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Ordered token name -> color mapping
pub type Palette = IndexMap<String, String>;

/// Metadata field names, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
    Id,
    Name,
    Version,
    Author,
    Description,
    SourceDir,
}

impl MetaKey {
    pub const ALL: [MetaKey; 6] = [
        MetaKey::Id,
        MetaKey::Name,
        MetaKey::Version,
        MetaKey::Author,
        MetaKey::Description,
        MetaKey::SourceDir,
    ];

    /// Key as written in the theme file
    pub fn as_str(self) -> &'static str {
        match self {
            MetaKey::Id => "id",
            MetaKey::Name => "name",
            MetaKey::Version => "version",
            MetaKey::Author => "author",
            MetaKey::Description => "description",
            MetaKey::SourceDir => "sourceDir",
        }
    }

    /// Parse a key name (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for MetaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which palette a token belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dark,
    Light,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Dark, Section::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Dark => "dark",
            Section::Light => "light",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Section::Dark),
            "light" => Some(Section::Light),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one palette entry (`dark.bg`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteTarget {
    pub section: Section,
    pub key: String,
}

impl PaletteTarget {
    pub fn new(section: Section, key: impl Into<String>) -> Self {
        Self {
            section,
            key: key.into(),
        }
    }

    /// Parse `section.key`; the key may itself contain dots
    pub fn parse(spec: &str) -> Option<Self> {
        let (section, key) = spec.split_once('.')?;
        let section = Section::parse(section)?;
        if key.is_empty() {
            return None;
        }
        Some(Self::new(section, key))
    }
}

impl fmt::Display for PaletteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.key)
    }
}

/// Theme metadata (missing keys read as empty strings)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(
        rename = "sourceDir",
        default,
        deserialize_with = "lenient_string"
    )]
    pub source_dir: String,
}

impl Metadata {
    pub fn get(&self, key: MetaKey) -> &str {
        match key {
            MetaKey::Id => &self.id,
            MetaKey::Name => &self.name,
            MetaKey::Version => &self.version,
            MetaKey::Author => &self.author,
            MetaKey::Description => &self.description,
            MetaKey::SourceDir => &self.source_dir,
        }
    }

    pub fn set(&mut self, key: MetaKey, value: impl Into<String>) {
        let slot = match key {
            MetaKey::Id => &mut self.id,
            MetaKey::Name => &mut self.name,
            MetaKey::Version => &mut self.version,
            MetaKey::Author => &mut self.author,
            MetaKey::Description => &mut self.description,
            MetaKey::SourceDir => &mut self.source_dir,
        };
        *slot = value.into();
    }
}

/// Accept any JSON scalar as text; `null` becomes empty
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// The theme being edited
///
/// Cloning produces a fully independent copy, which is what snapshots use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    #[serde(flatten)]
    pub metadata: Metadata,
    pub dark: Palette,
    pub light: Palette,
    /// Top-level keys this editor does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThemeDocument {
    /// Parse a theme from JSON text
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Serialize as pretty JSON with a trailing newline
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    pub fn palette(&self, section: Section) -> &Palette {
        match section {
            Section::Dark => &self.dark,
            Section::Light => &self.light,
        }
    }

    pub fn palette_mut(&mut self, section: Section) -> &mut Palette {
        match section {
            Section::Dark => &mut self.dark,
            Section::Light => &mut self.light,
        }
    }

    /// Look up a palette color
    pub fn color(&self, target: &PaletteTarget) -> Option<&str> {
        self.palette(target.section)
            .get(&target.key)
            .map(String::as_str)
    }
}
