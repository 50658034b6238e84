//! Color utilities for terminal rendering

use nexus_core::Rgba;
use ratatui::style::Color;

/// Parse a `#rrggbb` palette entry; anything unparseable falls back to the
/// terminal default
pub fn hex(color: &str) -> Color {
    color.parse().unwrap_or(Color::Reset)
}

/// Flatten a translucent CSS color onto an opaque background
pub fn over(color: Rgba, background: Color) -> Color {
    let (br, bg, bb) = channels(background);
    let a = color.a.clamp(0.0, 1.0);
    let blend = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;

    Color::Rgb(blend(color.r, br), blend(color.g, bg), blend(color.b, bb))
}

/// Mix two colors
pub fn mix(a: Color, b: Color, ratio: f32) -> Color {
    let ratio = ratio.clamp(0.0, 1.0);
    let (ar, ag, ab) = channels(a);
    let (br, bg, bb) = channels(b);
    let lerp = |x: u8, y: u8| (x as f32 * (1.0 - ratio) + y as f32 * ratio).round() as u8;

    Color::Rgb(lerp(ar, br), lerp(ag, bg), lerp(ab, bb))
}

/// RGB channels of a color; non-RGB colors read as black
fn channels(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    }
}
