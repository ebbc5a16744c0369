//! Color codec
//!
//! Pure conversions between the three projections of a palette color:
//! hex strings (`#RRGGBB`), RGB triplets and HSL triplets.
//!
//! HSL values are rounded to whole numbers, so going hex -> HSL -> hex may
//! drift by a few units per channel. Hex -> RGB -> hex is exact.

/// Color used for empty input
pub const BLACK_HEX: &str = "#000000";

/// RGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color with whole-number components
///
/// - `h`: hue in degrees, 0..=360
/// - `s`: saturation percent, 0..=100
/// - `l`: lightness percent, 0..=100
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    /// Create an HSL color, clamping each component to its range
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self {
            h: h.min(360),
            s: s.min(100),
            l: l.min(100),
        }
    }
}

/// Normalize arbitrary user text into `#RRGGBB` shape
///
/// Trims whitespace, prepends `#` when missing, uppercases and expands the
/// `#RGB` shorthand. Empty input becomes `#000000`. Characters are not
/// validated: `normalize_hex("zz")` is `"#ZZ"`, and parsing treats the bad
/// channels as 0.
pub fn normalize_hex(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return BLACK_HEX.to_string();
    }

    let mut hex = String::with_capacity(7);
    if !trimmed.starts_with('#') {
        hex.push('#');
    }
    hex.push_str(&trimmed.to_uppercase());

    let digits: Vec<char> = hex.chars().skip(1).collect();
    if digits.len() == 3 {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for ch in digits {
            expanded.push(ch);
            expanded.push(ch);
        }
        return expanded;
    }

    hex
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex string after normalizing it
    ///
    /// Never fails: missing or non-hex channel groups read as 0.
    pub fn from_hex(hex: &str) -> Self {
        let normalized = normalize_hex(hex);
        let digits = &normalized[1..];
        Self {
            r: parse_channel(digits, 0),
            g: parse_channel(digits, 2),
            b: parse_channel(digits, 4),
        }
    }

    /// Format as uppercase `#RRGGBB`
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL, rounding every component
    pub fn to_hsl(self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        // Gray: hue and saturation are both 0
        if self.r == self.g && self.g == self.b {
            return Hsl {
                h: 0,
                s: 0,
                l: round_percent(l),
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if self.r >= self.g && self.r >= self.b {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if self.g >= self.b {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;

        Hsl {
            h: (h * 360.0).round().clamp(0.0, 360.0) as u16,
            s: round_percent(s),
            l: round_percent(l),
        }
    }

    /// Convert from HSL
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = hsl.h.min(360) as f64 / 360.0;
        let s = hsl.s.min(100) as f64 / 100.0;
        let l = hsl.l.min(100) as f64 / 100.0;

        if hsl.s == 0 {
            let v = to_channel(l);
            return Self::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: to_channel(hue_to_rgb(p, q, h)),
            b: to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }
}

/// Hex string straight to HSL
pub fn hex_to_hsl(hex: &str) -> Hsl {
    Rgb::from_hex(hex).to_hsl()
}

/// HSL straight to a normalized hex string
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Rgb::from_hsl(hsl).to_hex()
}

fn parse_channel(digits: &str, start: usize) -> u8 {
    digits
        .get(start..start + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}

fn round_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Six-sector hue interpolation helper for HSL -> RGB
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shorthand() {
        assert_eq!(normalize_hex("#abc"), "#AABBCC");
        assert_eq!(normalize_hex("fff"), "#FFFFFF");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_hex(""), "#000000");
        assert_eq!(normalize_hex("   "), "#000000");
    }

    #[test]
    fn test_normalize_trims_and_prefixes() {
        assert_eq!(normalize_hex("  4da3ff "), "#4DA3FF");
        assert_eq!(normalize_hex("#4da3ff"), "#4DA3FF");
    }

    #[test]
    fn test_normalize_passes_malformed_through() {
        assert_eq!(normalize_hex("zz"), "#ZZ");
        assert_eq!(normalize_hex("#12345678"), "#12345678");
    }

    #[test]
    fn test_parse_bad_channels_read_as_zero() {
        assert_eq!(Rgb::from_hex("#GG10ZZ"), Rgb::new(0, 0x10, 0));
        assert_eq!(Rgb::from_hex("#12"), Rgb::new(0x12, 0, 0));
        assert_eq!(Rgb::from_hex("#"), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_parse_non_ascii_does_not_panic() {
        let _ = Rgb::from_hex("#é1234");
        let _ = Rgb::from_hex("ü");
    }

    #[test]
    fn test_to_hex_zero_pads() {
        assert_eq!(Rgb::new(0, 10, 255).to_hex(), "#000AFF");
    }

    #[test]
    fn test_primary_hues() {
        assert_eq!(Rgb::new(255, 0, 0).to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(Rgb::new(0, 255, 0).to_hsl(), Hsl::new(120, 100, 50));
        assert_eq!(Rgb::new(0, 0, 255).to_hsl(), Hsl::new(240, 100, 50));
    }

    #[test]
    fn test_from_hsl_primaries() {
        assert_eq!(Rgb::from_hsl(Hsl::new(0, 100, 50)), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(Hsl::new(120, 100, 50)), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(Hsl::new(360, 100, 50)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_from_hsl_gray_short_circuit() {
        assert_eq!(Rgb::from_hsl(Hsl::new(200, 0, 50)), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::from_hsl(Hsl::new(0, 0, 100)), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_known_accent() {
        assert_eq!(hex_to_hsl("#4DA3FF"), Hsl::new(211, 100, 65));
    }
}
