//! Line input parsing tests

mod common;

use common::*;
use theme_tweaker::color::hex_to_hsl;
use theme_tweaker::commands::Cmd;
use theme_tweaker::input::{parse_line, Input, InputQueue};
use theme_tweaker::messages::{AppMsg, DocumentMsg, Msg, PickerMsg, UiMsg};
use theme_tweaker::model::{Session, SliderChannel, UiMode};
use theme_tweaker::update::update;

fn msg(line: &str) -> Msg {
    match parse_line(line) {
        Ok(Input::Msg(msg)) => msg,
        other => panic!("{:?} parsed as {:?}", line, other),
    }
}

#[test]
fn test_set_color_line() {
    let Msg::Document(DocumentMsg::SetColor { target, text }) = msg("set dark.bg abc") else {
        panic!("expected SetColor");
    };
    assert_eq!(target, dark("bg"));
    assert_eq!(text, "abc");
}

#[test]
fn test_meta_keeps_spaces_in_text() {
    let Msg::Document(DocumentMsg::SetMeta { text, .. }) = msg("meta description A dark theme")
    else {
        panic!("expected SetMeta");
    };
    assert_eq!(text, "A dark theme");
}

#[test]
fn test_slider_lines() {
    assert!(matches!(
        msg("h 200"),
        Msg::Picker(PickerMsg::Slider {
            channel: SliderChannel::Hue,
            value: 200
        })
    ));
    assert!(matches!(
        msg("l 5"),
        Msg::Picker(PickerMsg::Slider {
            channel: SliderChannel::Lightness,
            value: 5
        })
    ));
    assert!(parse_line("s -1").is_err());
}

#[test]
fn test_path_and_mode_lines() {
    assert!(matches!(msg("path"), Msg::App(AppMsg::FetchPath)));
    assert!(matches!(msg("path ~/t.json"), Msg::App(AppMsg::SetPath(p)) if p == "~/t.json"));
    assert!(matches!(msg("mode"), Msg::Ui(UiMsg::ToggleMode)));
    assert!(matches!(msg("mode dark"), Msg::Ui(UiMsg::SetMode(UiMode::Dark))));
    assert!(parse_line("mode sepia").is_err());
}

#[test]
fn test_bad_targets() {
    assert!(parse_line("pick bg").is_err());
    assert!(parse_line("pick sepia.bg").is_err());
    assert!(parse_line("set dark.bg").is_err());
    assert!(matches!(parse_line("help"), Ok(Input::Help)));
}

#[test]
fn test_typed_session() {
    let mut session = loaded_session();
    for line in ["pick dark.bg", "h 120", "s 50", "l 50", "close", "set light.fg f00"] {
        update(&mut session, msg(line));
    }
    let hsl = hex_to_hsl(&color(&session, &dark("bg")));
    assert_eq!((hsl.h, hsl.l), (120, 50));
    assert_eq!(color(&session, &light("fg")), "#FF0000");
    assert_eq!(session.history.len(), 2);

    update(&mut session, msg("undo"));
    update(&mut session, msg("undo"));
    assert_eq!(color(&session, &dark("bg")), "#101018");
}

#[test]
fn test_input_waits_for_first_load() {
    let mut session = Session::default();
    let mut queue = InputQueue::new();
    let Some(Cmd::LoadTheme { request }) = update(&mut session, Msg::App(AppMsg::Load)) else {
        panic!("expected LoadTheme");
    };

    // Piped lines arrive before the theme does
    for line in ["set dark.bg #123456", "save", "quit"] {
        assert!(queue.accept(&session, msg(line)).is_none());
    }
    assert_eq!(queue.len(), 3);
    assert!(queue.release(&session).is_none());

    update(
        &mut session,
        Msg::App(AppMsg::LoadCompleted {
            request,
            result: Ok(sample_doc()),
        }),
    );

    let edit = queue.release(&session).expect("edit released after load");
    update(&mut session, edit);
    assert_eq!(color(&session, &dark("bg")), "#123456");

    let save = queue.release(&session).expect("save released after edit");
    let Some(Cmd::SaveTheme { doc }) = update(&mut session, save) else {
        panic!("expected SaveTheme");
    };
    assert_eq!(doc.dark["bg"], "#123456");

    // Quit stays queued until the save lands
    assert!(queue.release(&session).is_none());
    update(&mut session, Msg::App(AppMsg::SaveCompleted(Ok(()))));
    assert!(matches!(queue.release(&session), Some(Msg::App(AppMsg::Quit))));
    assert!(queue.is_empty());
}

#[test]
fn test_idle_input_runs_immediately() {
    let session = loaded_session();
    let mut queue = InputQueue::new();
    assert!(queue.accept(&session, msg("undo")).is_some());
    assert!(queue.is_empty());
}
