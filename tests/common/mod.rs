//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use theme_tweaker::commands::Cmd;
use theme_tweaker::messages::{AppMsg, Msg};
use theme_tweaker::model::Session;
use theme_tweaker::theme::{PaletteTarget, Section, ThemeDocument};
use theme_tweaker::update::update;

/// A small theme with every metadata key and an unknown top-level key
pub const SAMPLE_THEME: &str = r##"{
  "id": "kav",
  "name": "KAV",
  "version": "1.0.0",
  "author": "someone",
  "description": "Test theme",
  "sourceDir": "themes/kav",
  "dark": {
    "bg": "#101018",
    "fg": "#e0e0e0",
    "accent": "#4DA3FF"
  },
  "light": {
    "bg": "#fff",
    "fg": "#222222",
    "accent": "#118AB2"
  },
  "variants": ["soft", "hard"]
}
"##;

pub fn sample_doc() -> ThemeDocument {
    ThemeDocument::from_json(SAMPLE_THEME).unwrap()
}

/// A session with `doc` loaded through the normal load path
pub fn session_with(doc: ThemeDocument) -> Session {
    let mut session = Session::default();
    session.load(doc);
    session
}

pub fn loaded_session() -> Session {
    session_with(sample_doc())
}

pub fn dark(key: &str) -> PaletteTarget {
    PaletteTarget::new(Section::Dark, key)
}

pub fn light(key: &str) -> PaletteTarget {
    PaletteTarget::new(Section::Light, key)
}

/// Current value of a palette entry as read back from the fields
pub fn color(session: &Session, target: &PaletteTarget) -> String {
    session
        .read_values()
        .and_then(|doc| doc.color(target).map(str::to_string))
        .unwrap_or_default()
}

/// Send a message, returning the flattened commands
pub fn send(session: &mut Session, msg: Msg) -> Vec<Cmd> {
    update(session, msg).map(Cmd::flatten).unwrap_or_default()
}

/// Run a load request to completion with `result`
pub fn complete_load(session: &mut Session, result: Result<ThemeDocument, String>) {
    let request = match update(session, Msg::App(AppMsg::Load)) {
        Some(Cmd::LoadTheme { request }) => request,
        other => panic!("expected LoadTheme, got {:?}", other),
    };
    update(session, Msg::App(AppMsg::LoadCompleted { request, result }));
}

/// Write the sample theme to `dir/name`
pub fn write_sample(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, SAMPLE_THEME).unwrap();
    path
}
