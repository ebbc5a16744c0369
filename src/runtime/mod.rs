//! Runtime module - terminal integration
//!
//! This module contains the interactive front end:
//! - `app` - event loop, command execution and worker threads

pub mod app;

pub use app::App;
