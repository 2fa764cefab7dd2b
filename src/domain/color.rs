// Colour grammar and colour-map catalog backing field validation
use palette::{FromColor, Hsv, Srgb, named};
use std::str::FromStr;

/// Colour map names the rendering backend registers. A trailing `_r`
/// selects the reversed variant of any catalog entry.
pub const COLORMAPS: &[&str] = &[
    "viridis", "plasma", "inferno", "magma", "cividis", "coolwarm", "bwr", "seismic", "RdYlGn",
    "RdYlBu", "Spectral", "Blues", "Greens", "Reds", "Oranges", "Purples", "Greys", "YlOrRd",
    "PuBuGn", "twilight",
];

/// Perceived-luminance split for picking readable foreground colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourShade {
    Light,
    Dark,
}

/// Parse a CSS named colour or a `#rrggbb` hex string.
pub fn parse_color(value: &str) -> Option<Srgb<u8>> {
    let trimmed = value.trim();
    if let Some(colour) = named::from_str(&trimmed.to_ascii_lowercase()) {
        return Some(colour);
    }
    if trimmed.starts_with('#') {
        return Srgb::<u8>::from_str(trimmed).ok();
    }
    None
}

pub fn is_color_like(value: &str) -> bool {
    parse_color(value).is_some()
}

pub fn has_colormap(name: &str) -> bool {
    let base = name.strip_suffix("_r").unwrap_or(name);
    COLORMAPS.contains(&base)
}

/// Complimentary colour: hue rotated 180 degrees in HSV, returned as hex.
pub fn complementary_color(colour: &str) -> Option<String> {
    let rgb = parse_color(colour)?.into_format::<f32>();
    let mut hsv = Hsv::from_color(rgb);
    hsv.hue = hsv.hue + 180.0;
    let comp = Srgb::from_color(hsv).into_format::<u8>();
    Some(format!("#{:02x}{:02x}{:02x}", comp.red, comp.green, comp.blue))
}

/// Classify a colour as light or dark using HSP perceived brightness.
pub fn shade_of(colour: &str) -> Option<ColourShade> {
    let rgb = parse_color(colour)?.into_format::<f32>();
    let (r, g, b) = (rgb.red * 255.0, rgb.green * 255.0, rgb.blue * 255.0);
    let hsp = (0.299 * r * r + 0.587 * g * g + 0.114 * b * b).sqrt();
    if hsp > 127.5 {
        Some(ColourShade::Light)
    } else {
        Some(ColourShade::Dark)
    }
}
