//! Color codec tests

use theme_tweaker::color::{hex_to_hsl, hsl_to_hex, normalize_hex, Hsl, Rgb};

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize_hex("#abc"), "#AABBCC");
    assert_eq!(normalize_hex("fff"), "#FFFFFF");
    assert_eq!(normalize_hex(""), "#000000");
    assert_eq!(normalize_hex("4da3ff"), "#4DA3FF");
}

#[test]
fn test_normalize_is_idempotent() {
    for input in [
        "", "abc", "#abc", "#4da3ff", "zzz", "#12", "12345", "not a color", " #FfF ", "#ggg",
    ] {
        let once = normalize_hex(input);
        assert_eq!(normalize_hex(&once), once, "input {:?}", input);
    }
}

#[test]
fn test_malformed_hex_never_panics() {
    for input in ["#zzzzzz", "#12", "xyz", "#12345678", "ü"] {
        let rgb = Rgb::from_hex(input);
        // Channels that do not parse read as 0
        let _ = rgb.to_hex();
    }
    assert_eq!(Rgb::from_hex("#zz00FF"), Rgb::new(0, 0, 255));
}

#[test]
fn test_hex_rgb_roundtrip_is_exact() {
    for hex in ["#000000", "#FFFFFF", "#4DA3FF", "#101018", "#F15BB5", "#7F8081"] {
        assert_eq!(Rgb::from_hex(hex).to_hex(), hex);
    }
}

#[test]
fn test_hsl_roundtrip_stays_close() {
    let samples = (0u32..=255)
        .step_by(17)
        .flat_map(|r| (0u32..=255).step_by(51).map(move |g| (r, g, 255 - r)));
    for (r, g, b) in samples {
        let rgb = Rgb::new(r as u8, g as u8, b as u8);
        let back = Rgb::from_hsl(rgb.to_hsl());
        for (a, z) in [(rgb.r, back.r), (rgb.g, back.g), (rgb.b, back.b)] {
            assert!(
                (a as i16 - z as i16).abs() <= 6,
                "{} -> {}",
                rgb.to_hex(),
                back.to_hex()
            );
        }
    }
}

#[test]
fn test_grayscale_has_zero_saturation() {
    for v in [0u8, 1, 64, 128, 200, 255] {
        let hsl = Rgb::new(v, v, v).to_hsl();
        assert_eq!(hsl.s, 0);
        assert_eq!(hsl.h, 0);
    }
}

#[test]
fn test_known_conversions() {
    assert_eq!(hex_to_hsl("#4DA3FF"), Hsl::new(211, 100, 65));
    assert_eq!(hsl_to_hex(Hsl::new(0, 100, 50)), "#FF0000");
    assert_eq!(hsl_to_hex(Hsl::new(120, 100, 25)), "#008000");
    assert_eq!(hsl_to_hex(Hsl::new(0, 0, 50)), "#808080");
}
