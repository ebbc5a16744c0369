//! Color picker message handlers

use crate::commands::Cmd;
use crate::messages::PickerMsg;
use crate::model::{Session, StatusTone};
use crate::presets::PRESETS_KEY;

/// Handle picker messages
pub fn update_picker(session: &mut Session, msg: PickerMsg) -> Option<Cmd> {
    match msg {
        PickerMsg::Open(target) => {
            if !session.open_picker(target.clone()) {
                session.set_status(format!("Unknown token: {}", target), StatusTone::Error);
            }
            Some(Cmd::Redraw)
        }

        PickerMsg::Close => {
            if session.close_picker() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        PickerMsg::HexInput(text) | PickerMsg::NativeInput(text) => {
            edited(session, |s| s.apply_picker_color(&text))
        }

        PickerMsg::Slider { channel, value } => {
            edited(session, |s| s.picker_slider(channel, value))
        }

        PickerMsg::Preset(index) => edited(session, |s| s.apply_preset(index)),

        PickerMsg::Harmony(index) => edited(session, |s| s.apply_harmony(index)),

        PickerMsg::AddPreset => {
            if !session.add_current_preset() {
                return None;
            }
            session.set_status("Preset added", StatusTone::Ok);
            Some(Cmd::batch(vec![
                Cmd::StoreValue {
                    key: PRESETS_KEY.to_string(),
                    value: session.presets.to_value(),
                },
                Cmd::Redraw,
            ]))
        }
    }
}

/// Run a picker color change and report it
///
/// Ignored entirely when no picker is open or the source index is out of
/// range.
fn edited(
    session: &mut Session,
    apply: impl FnOnce(&mut Session) -> Option<String>,
) -> Option<Cmd> {
    let hex = apply(session)?;
    tracing::trace!("Picker applied {}", hex);
    session.set_status("Edited", StatusTone::Warn);
    Some(Cmd::Redraw)
}
