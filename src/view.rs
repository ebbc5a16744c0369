//! Text rendering of the session
//!
//! Everything the user sees is produced here from the session alone; the
//! runtime only prints the result.

use std::fmt::{self, Write};

use crate::color::Rgb;
use crate::model::{candidate_title, PickerSession, Session, StatusTone};
use crate::theme::Section;

/// Rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewOptions {
    /// Draw swatches with 24-bit ANSI backgrounds
    pub ansi: bool,
}

/// Render the whole session
pub fn render(session: &Session, options: ViewOptions) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_into(session, options, &mut out);
    out
}

fn render_into(session: &Session, options: ViewOptions, out: &mut String) -> fmt::Result {
    let ui = &session.ui;
    writeln!(out, "== Theme Tweaker [{}] ==", ui.mode)?;
    if !ui.active_path.is_empty() {
        writeln!(out, "Path: {}", ui.active_path)?;
    }
    if !ui.status.text.is_empty() {
        match ui.status.tone {
            StatusTone::Neutral => writeln!(out, "Status: {}", ui.status.text)?,
            tone => writeln!(out, "Status: {} ({})", ui.status.text, tone.as_str())?,
        }
    }

    if session.fields.is_loaded() {
        writeln!(out)?;
        writeln!(out, "Metadata")?;
        for field in session.fields.meta_fields() {
            writeln!(out, "  {:<12} {}", field.key.as_str(), field.text)?;
        }
        for section in Section::ALL {
            writeln!(out)?;
            writeln!(out, "{}", title_case(section.as_str()))?;
            for field in session.fields.section_fields(section) {
                writeln!(
                    out,
                    "  {} {:<24} {}",
                    swatch(&field.text, options),
                    field.target.key,
                    field.text
                )?;
            }
        }
        writeln!(
            out,
            "\nUndo: {} of {}",
            session.history.len(),
            session.history.max_size()
        )?;
    } else {
        writeln!(out, "\nNo theme loaded")?;
    }

    if let Some(picker) = &session.picker {
        writeln!(out)?;
        render_picker(session, picker, options, out)?;
    }

    let candidates = ui.candidates.filtered();
    if !ui.candidates.paths.is_empty() {
        writeln!(out)?;
        if ui.candidates.filter.is_empty() {
            writeln!(out, "Themes ({})", candidates.len())?;
        } else {
            writeln!(
                out,
                "Themes matching {:?} ({} of {})",
                ui.candidates.filter,
                candidates.len(),
                ui.candidates.paths.len()
            )?;
        }
        for (i, path) in candidates.iter().enumerate() {
            let marker = if *path == ui.active_path { '*' } else { ' ' };
            writeln!(
                out,
                " {}{:>3}. {:<32} {}",
                marker,
                i + 1,
                candidate_title(path),
                path
            )?;
        }
    }

    Ok(())
}

fn render_picker(
    session: &Session,
    picker: &PickerSession,
    options: ViewOptions,
    out: &mut String,
) -> fmt::Result {
    let readout = &picker.readout;
    writeln!(out, "Picker: {}", picker.title())?;
    writeln!(out, "  {}", picker.subtitle())?;
    writeln!(
        out,
        "  {} {}   H {:>3}  S {:>3}  L {:>3}",
        swatch(&readout.hex, options),
        readout.hex,
        readout.hsl.h,
        readout.hsl.s,
        readout.hsl.l
    )?;

    write!(out, "  Harmony:")?;
    for (i, hex) in readout.harmony.iter().enumerate() {
        write!(out, " {}:{}", i + 1, swatch_or_hex(hex, options))?;
    }
    writeln!(out)?;

    write!(out, "  Presets:")?;
    for (i, hex) in session.presets.list().iter().enumerate() {
        write!(out, " {}:{}", i + 1, swatch_or_hex(hex, options))?;
    }
    writeln!(out)
}

fn swatch(hex: &str, options: ViewOptions) -> String {
    if options.ansi {
        let Rgb { r, g, b } = Rgb::from_hex(hex);
        format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b)
    } else {
        "[]".to_string()
    }
}

fn swatch_or_hex(hex: &str, options: ViewOptions) -> String {
    if options.ansi {
        swatch(hex, options)
    } else {
        hex.to_string()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{PaletteTarget, ThemeDocument};

    fn session() -> Session {
        let mut session = Session::default();
        session.load(
            ThemeDocument::from_json(
                r##"{"name": "KAV", "dark": {"bg": "#000"}, "light": {"bg": "#fff"}}"##,
            )
            .unwrap(),
        );
        session
    }

    #[test]
    fn test_render_lists_palettes() {
        let text = render(&session(), ViewOptions::default());
        assert!(text
            .lines()
            .any(|line| line.starts_with("  name") && line.ends_with("KAV")));
        assert!(text.contains("Dark"));
        assert!(text.contains("#FFFFFF"));
        assert!(!text.contains("Picker:"));
    }

    #[test]
    fn test_render_picker_panel() {
        let mut session = session();
        session.open_picker(PaletteTarget::new(Section::Dark, "bg"));
        let text = render(&session, ViewOptions::default());
        assert!(text.contains("Picker: bg"));
        assert!(text.contains("  dark.bg"));
        assert!(text.contains("Harmony: 1:#F2F2F2"));
    }

    #[test]
    fn test_render_without_theme() {
        let text = render(&Session::default(), ViewOptions::default());
        assert!(text.contains("No theme loaded"));
    }
}
