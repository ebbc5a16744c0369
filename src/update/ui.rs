//! UI message handlers (status, mode flag, candidate filter)

use serde_json::Value;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{Session, UiMode, UI_MODE_KEY};

/// Handle UI messages
pub fn update_ui(session: &mut Session, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetStatus { text, tone } => {
            session.set_status(text, tone);
            Some(Cmd::Redraw)
        }

        UiMsg::SetMode(mode) => Some(set_mode(session, mode)),

        UiMsg::ToggleMode => {
            let mode = session.ui.mode.toggled();
            Some(set_mode(session, mode))
        }

        UiMsg::FilterCandidates(filter) => {
            session.ui.candidates.filter = filter.trim().to_string();
            Some(Cmd::Redraw)
        }

        UiMsg::Show => Some(Cmd::Redraw),
    }
}

fn set_mode(session: &mut Session, mode: UiMode) -> Cmd {
    session.ui.mode = mode;
    Cmd::batch(vec![
        Cmd::StoreValue {
            key: UI_MODE_KEY.to_string(),
            value: Value::String(mode.as_str().to_string()),
        },
        Cmd::Redraw,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_mode_persists() {
        let mut session = Session::default();
        let cmd = update_ui(&mut session, UiMsg::ToggleMode).unwrap();
        assert_eq!(session.ui.mode, UiMode::Dark);
        assert!(cmd.flatten().contains(&Cmd::StoreValue {
            key: UI_MODE_KEY.to_string(),
            value: Value::String("dark".into()),
        }));
    }
}
