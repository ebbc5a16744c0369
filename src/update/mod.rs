//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod picker;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::Session;

#[cfg(debug_assertions)]
use crate::tracing::SessionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use picker::update_picker;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(session: &mut Session, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(session, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(session, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(session: &mut Session, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(session, m),
        Msg::Picker(m) => picker::update_picker(session, m),
        Msg::App(m) => app::update_app(session, m),
        Msg::Ui(m) => ui::update_ui(session, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures undo depth and picker phase before/after and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(session: &mut Session, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SessionSnapshot::from_session(session);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(session, msg);

    let after = SessionSnapshot::from_session(session);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "history", %diff, "state changed");
    }

    result
}

/// Get a display name for a message
///
/// Completions carrying whole documents are shortened to their variant.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Picker(m) => format!("Picker::{:?}", m),
        Msg::App(AppMsg::LoadCompleted { request, result }) => format!(
            "App::LoadCompleted({}, {})",
            request.0,
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
