//! Color picker session state
//!
//! A session is bound to one palette entry while the picker is open. It
//! starts idle; the first color change moves it to editing, which is the
//! only transition that records an undo snapshot.

use crate::color::{hex_to_hsl, hsl_to_hex, normalize_hex, Hsl};
use crate::theme::PaletteTarget;

/// Lightness levels of the harmony ramp, lightest first
pub const HARMONY_STEPS: [u8; 9] = [95, 85, 75, 65, 55, 45, 35, 25, 15];

/// Sub-state of an open picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerPhase {
    /// Open, nothing changed yet
    #[default]
    Idle,
    /// At least one color change applied since opening
    Editing,
}

/// One of the three HSL sliders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderChannel {
    Hue,
    Saturation,
    Lightness,
}

impl SliderChannel {
    /// Largest value the slider accepts
    pub fn max(self) -> u16 {
        match self {
            SliderChannel::Hue => 360,
            SliderChannel::Saturation | SliderChannel::Lightness => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SliderChannel::Hue => "H",
            SliderChannel::Saturation => "S",
            SliderChannel::Lightness => "L",
        }
    }
}

/// Everything the picker displays for the current color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerReadout {
    /// Normalized hex (text input, preview and native input)
    pub hex: String,
    /// Slider positions
    pub hsl: Hsl,
    /// Harmony swatches for `hex`
    pub harmony: Vec<String>,
}

impl PickerReadout {
    pub fn from_hex(hex: &str) -> Self {
        let hex = normalize_hex(hex);
        Self {
            hsl: hex_to_hsl(&hex),
            harmony: harmony_ramp(&hex),
            hex,
        }
    }

    /// Slider triplet with one channel replaced
    pub fn with_slider(&self, channel: SliderChannel, value: u16) -> Hsl {
        let value = value.min(channel.max());
        let Hsl { h, s, l } = self.hsl;
        match channel {
            SliderChannel::Hue => Hsl::new(value, s, l),
            SliderChannel::Saturation => Hsl::new(h, value as u8, l),
            SliderChannel::Lightness => Hsl::new(h, s, value as u8),
        }
    }
}

/// Swatches sharing the base hue and saturation at fixed lightness steps
pub fn harmony_ramp(base: &str) -> Vec<String> {
    let hsl = hex_to_hsl(base);
    HARMONY_STEPS
        .iter()
        .map(|&l| hsl_to_hex(Hsl::new(hsl.h, hsl.s, l)))
        .collect()
}

/// An open picker bound to one palette entry
#[derive(Debug, Clone)]
pub struct PickerSession {
    pub target: PaletteTarget,
    pub phase: PickerPhase,
    pub readout: PickerReadout,
}

impl PickerSession {
    /// Open on `target`, seeding the display from its current value
    pub fn open(target: PaletteTarget, current: &str) -> Self {
        Self {
            target,
            phase: PickerPhase::Idle,
            readout: PickerReadout::from_hex(current),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.phase == PickerPhase::Editing
    }

    /// Title shown above the picker (the token name)
    pub fn title(&self) -> &str {
        &self.target.key
    }

    /// Subtitle shown below the title (`section.key`)
    pub fn subtitle(&self) -> String {
        self.target.to_string()
    }

    /// Mark the session as editing; returns true on the idle -> editing edge
    pub fn begin_edit(&mut self) -> bool {
        let first = self.phase == PickerPhase::Idle;
        self.phase = PickerPhase::Editing;
        first
    }

    /// Refresh the readout for a newly applied color
    pub fn sync(&mut self, hex: &str) {
        self.readout = PickerReadout::from_hex(hex);
    }
}
