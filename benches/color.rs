//! Benchmarks for the color codec and picker hot paths
//!
//! Run with: cargo bench color

use theme_tweaker::color::{hex_to_hsl, hsl_to_hex, normalize_hex, Hsl, Rgb};
use theme_tweaker::model::{harmony_ramp, Session, SliderChannel};
use theme_tweaker::theme::{PaletteTarget, Section, ThemeDocument};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Codec
// ============================================================================

#[divan::bench(args = ["#4DA3FF", "4da3ff", "#abc", "not a color"])]
fn normalize(input: &str) -> String {
    normalize_hex(divan::black_box(input))
}

#[divan::bench]
fn hex_roundtrip_via_hsl() -> String {
    hsl_to_hex(hex_to_hsl(divan::black_box("#4DA3FF")))
}

#[divan::bench]
fn all_hues() -> Vec<Rgb> {
    (0..=360)
        .map(|h| Rgb::from_hsl(Hsl::new(h, 80, 50)))
        .collect()
}

#[divan::bench]
fn harmony() -> Vec<String> {
    harmony_ramp(divan::black_box("#4DA3FF"))
}

// ============================================================================
// Picker drag
// ============================================================================

fn palette_doc(tokens: usize) -> ThemeDocument {
    let mut doc = ThemeDocument::default();
    for i in 0..tokens {
        let hex = format!("#{:06X}", i * 0x0101);
        doc.dark.insert(format!("token{}", i), hex.clone());
        doc.light.insert(format!("token{}", i), hex);
    }
    doc
}

/// One slider drag of 100 steps; every step reads back the whole document
#[divan::bench(args = [10, 50, 200])]
fn slider_drag(bencher: divan::Bencher, tokens: usize) {
    bencher
        .with_inputs(|| {
            let mut session = Session::default();
            session.load(palette_doc(tokens));
            session.open_picker(PaletteTarget::new(Section::Dark, "token0"));
            session
        })
        .bench_local_values(|mut session| {
            for value in 0..100 {
                session.picker_slider(SliderChannel::Lightness, value);
            }
            session.close_picker();
            session
        });
}
