//! Line input handling
//!
//! Maps one line typed at the prompt to a message. Swatch, preset and
//! candidate numbers are shown 1-based by the view and converted here.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::messages::{AppMsg, Msg, PickerMsg, UiMsg};
use crate::model::{Session, SliderChannel, UiMode};
use crate::theme::{MetaKey, PaletteTarget};

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  meta <key> [text]        set a metadata field (id, name, version, author, description, sourceDir)
  set <section.key> <hex>  set a palette color directly
  undo                     restore the previous state
  pick <section.key>       open the color picker on a palette entry
  hex <text>               picker: type a hex color
  native <hex>             picker: native color input
  h|s|l <value>            picker: move the hue, saturation or lightness slider
  preset <n>               picker: apply preset n
  harmony <n>              picker: apply harmony swatch n
  add-preset               picker: save the current color as a preset
  close                    close the picker
  load | save | scan       reload, save, list theme files
  filter [text]            filter the theme list
  open <n>                 switch to theme n of the filtered list
  path [file]              show or switch the active theme file
  upload <file>            upload a local theme file and switch to it
  mode [light|dark]        set or toggle the UI mode
  show | help | quit";

/// One parsed input line
#[derive(Debug, Clone)]
pub enum Input {
    Msg(Msg),
    Help,
    Blank,
}

/// Parse one input line
pub fn parse_line(line: &str) -> Result<Input, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Blank);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let msg = match command {
        "help" | "?" => return Ok(Input::Help),

        "meta" => {
            let (key, text) = match rest.split_once(char::is_whitespace) {
                Some((key, text)) => (key, text.trim()),
                None => (rest, ""),
            };
            let key =
                MetaKey::parse(key).ok_or_else(|| format!("Unknown metadata key: {:?}", key))?;
            Msg::set_meta(key, text)
        }
        "set" => {
            let (target, color) = rest
                .split_once(char::is_whitespace)
                .ok_or("Usage: set <section.key> <hex>")?;
            Msg::set_color(parse_target(target)?, color.trim())
        }
        "undo" => Msg::undo(),

        "pick" => Msg::Picker(PickerMsg::Open(parse_target(rest)?)),
        "hex" => Msg::Picker(PickerMsg::HexInput(rest.to_string())),
        "native" => Msg::Picker(PickerMsg::NativeInput(rest.to_string())),
        "h" | "s" | "l" => {
            let channel = match command {
                "h" => SliderChannel::Hue,
                "s" => SliderChannel::Saturation,
                _ => SliderChannel::Lightness,
            };
            let value = rest
                .parse::<u16>()
                .map_err(|_| format!("Invalid {} value: {:?}", channel.label(), rest))?;
            Msg::Picker(PickerMsg::Slider { channel, value })
        }
        "preset" => Msg::Picker(PickerMsg::Preset(parse_number(rest)?)),
        "harmony" => Msg::Picker(PickerMsg::Harmony(parse_number(rest)?)),
        "add-preset" => Msg::Picker(PickerMsg::AddPreset),
        "close" => Msg::Picker(PickerMsg::Close),

        "load" => Msg::App(AppMsg::Load),
        "save" => Msg::App(AppMsg::Save),
        "scan" => Msg::App(AppMsg::Scan),
        "open" => Msg::App(AppMsg::OpenCandidate(parse_number(rest)?)),
        "path" if rest.is_empty() => Msg::App(AppMsg::FetchPath),
        "path" => Msg::App(AppMsg::SetPath(rest.to_string())),
        "upload" if rest.is_empty() => return Err("Usage: upload <file>".to_string()),
        "upload" => Msg::App(AppMsg::Upload(PathBuf::from(rest))),
        "quit" | "exit" => Msg::App(AppMsg::Quit),

        "filter" => Msg::Ui(UiMsg::FilterCandidates(rest.to_string())),
        "mode" => match rest {
            "" => Msg::Ui(UiMsg::ToggleMode),
            "light" | "dark" => Msg::Ui(UiMsg::SetMode(UiMode::parse(rest))),
            other => return Err(format!("Unknown mode: {:?}", other)),
        },
        "show" => Msg::Ui(UiMsg::Show),

        other => return Err(format!("Unknown command: {:?} (try help)", other)),
    };
    Ok(Input::Msg(msg))
}

/// Typed messages held back while a load or save is in flight
///
/// Lines piped in ahead of the first load would otherwise run against an
/// empty session, and a trailing `quit` would exit before a save lands.
/// Order is kept: once anything is held, later input queues behind it.
#[derive(Debug, Default)]
pub struct InputQueue {
    held: VecDeque<Msg>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take one typed message; returns it when it can run now
    pub fn accept(&mut self, session: &Session, msg: Msg) -> Option<Msg> {
        if session.ui.is_busy() || !self.held.is_empty() {
            tracing::debug!("Holding input until the theme settles");
            self.held.push_back(msg);
            return None;
        }
        Some(msg)
    }

    /// Next held message, once the session is idle
    pub fn release(&mut self, session: &Session) -> Option<Msg> {
        if session.ui.is_busy() {
            return None;
        }
        self.held.pop_front()
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

fn parse_target(text: &str) -> Result<PaletteTarget, String> {
    PaletteTarget::parse(text.trim())
        .ok_or_else(|| format!("Expected dark.<key> or light.<key>, got {:?}", text))
}

/// Parse a 1-based number into a 0-based index
fn parse_number(text: &str) -> Result<usize, String> {
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(format!("Expected a number from 1, got {:?}", text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DocumentMsg;

    #[test]
    fn test_meta_allows_empty_text() {
        let Ok(Input::Msg(Msg::Document(DocumentMsg::SetMeta { key, text }))) =
            parse_line("meta author")
        else {
            panic!("expected SetMeta");
        };
        assert_eq!(key, MetaKey::Author);
        assert_eq!(text, "");
    }

    #[test]
    fn test_numbers_are_one_based() {
        assert!(matches!(
            parse_line("preset 1"),
            Ok(Input::Msg(Msg::Picker(PickerMsg::Preset(0))))
        ));
        assert!(parse_line("harmony 0").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse_line("frobnicate").is_err());
        assert!(matches!(parse_line("   "), Ok(Input::Blank)));
    }
}
