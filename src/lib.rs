//! Theme Tweaker - Elm-style theme palette editor
//!
//! This crate provides the core types and logic for editing dark/light
//! palette theme files, implementing the Elm Architecture pattern: a
//! [`model::Session`] updated by [`messages::Msg`] values, with side effects
//! described as [`commands::Cmd`] values.

pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod input;
pub mod messages;
pub mod model;
pub mod presets;
pub mod provider;
pub mod storage;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::TweakerConfig;
pub use messages::Msg;
pub use model::Session;
pub use theme::ThemeDocument;
