//! Direct field edits and undo

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::{Session, StatusTone};

/// Handle document messages
///
/// Text fields record one snapshot per change, unlike the picker, which
/// coalesces a whole open/close cycle into one.
pub fn update_document(session: &mut Session, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetMeta { key, text } => {
            if session.edit_meta(key, text) {
                session.set_status("Edited", StatusTone::Warn);
            } else {
                session.set_status("No theme loaded", StatusTone::Error);
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::SetColor { target, text } => {
            match session.edit_color(&target, &text) {
                Some(normalized) => {
                    tracing::debug!("{} = {}", target, normalized);
                    session.set_status("Edited", StatusTone::Warn);
                }
                None => {
                    session.set_status(format!("Unknown token: {}", target), StatusTone::Error);
                }
            }
            Some(Cmd::Redraw)
        }

        DocumentMsg::Undo => {
            if session.undo() {
                session.set_status("Undo", StatusTone::Ok);
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
