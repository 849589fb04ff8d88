//! Card palette.
//!
//! Style tokens used by the catalog resolve to a background/foreground pair.
//! The SVG writer paints every card from these colors.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::hex(0x000000);
    pub const WHITE: Color = Color::hex(0xffffff);
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 0xff,
        }
    }

    /// Same color with its alpha multiplied by `opacity` (0.0..=1.0).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// `#rrggbb`, alpha excluded.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction.
    pub fn opacity(self) -> f32 {
        self.a as f32 / 255.0
    }
}

/// Resolved card colors. Borders and text use the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub token: &'static str,
    pub background: Color,
    pub foreground: Color,
}

// === ASPECTS ===
pub const ASPECTS_RED: Color = Color::hex(0xf2a39c);
pub const ASPECTS_RED_DARK: Color = Color::hex(0x5b1f1c);
pub const ASPECTS_PURPLE: Color = Color::hex(0xc8b2e8);
pub const ASPECTS_PURPLE_DARK: Color = Color::hex(0x3d2660);
pub const ASPECTS_YELLOW: Color = Color::hex(0xf1d88a);
pub const ASPECTS_YELLOW_DARK: Color = Color::hex(0x5a4512);
pub const ASPECTS_BLUE: Color = Color::hex(0xa8c7ee);
pub const ASPECTS_BLUE_DARK: Color = Color::hex(0x1f3a5f);
pub const ASPECTS_GREEN: Color = Color::hex(0xb4deae);
pub const ASPECTS_GREEN_DARK: Color = Color::hex(0x234d22);

const PALETTE: &[CardStyle] = &[
    style("aspects-red", ASPECTS_RED, ASPECTS_RED_DARK),
    style("aspects-purple", ASPECTS_PURPLE, ASPECTS_PURPLE_DARK),
    style("aspects-yellow", ASPECTS_YELLOW, ASPECTS_YELLOW_DARK),
    style("aspects-blue", ASPECTS_BLUE, ASPECTS_BLUE_DARK),
    style("aspects-green", ASPECTS_GREEN, ASPECTS_GREEN_DARK),
    // Nature arts (muted 800/200 pairs)
    style("red", Color::hex(0x8a3030), Color::hex(0xf5cfcf)),
    style("blue", Color::hex(0x2d4691), Color::hex(0xc4d8f7)),
    style("teal", Color::hex(0x22615c), Color::hex(0xa9ede2)),
    style("yellow", Color::hex(0x7c5522), Color::hex(0xf5eaa0)),
    style("neutral", Color::hex(0x404040), Color::hex(0xe5e5e5)),
    style("green", Color::hex(0x2a6341), Color::hex(0xc3efd2)),
    style("purple", Color::hex(0x5d3580), Color::hex(0xe4d6f2)),
    style("slate", Color::hex(0x334155), Color::hex(0xf1f5f9)),
    style("cyan", Color::hex(0x255e70), Color::hex(0xb3ecf5)),
    style("indigo", Color::hex(0x3c3790), Color::hex(0xcdd3f5)),
    style("stone", Color::hex(0x292524), Color::hex(0xe7e5e4)),
];

const fn style(token: &'static str, background: Color, foreground: Color) -> CardStyle {
    CardStyle {
        token,
        background,
        foreground,
    }
}

/// Look up a style token.
pub fn resolve_style(token: &str) -> Option<CardStyle> {
    PALETTE.iter().copied().find(|s| s.token == token)
}

/// Every known style token, in palette order.
pub fn style_tokens() -> impl Iterator<Item = &'static str> {
    PALETTE.iter().map(|s| s.token)
}

/// Gradient stops of the card back (top-left to bottom-right).
pub const CARD_BACK_STOPS: [Color; 3] = [ASPECTS_PURPLE, ASPECTS_BLUE, ASPECTS_GREEN];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_opacity() {
        let c = Color::hex(0x1f3a5f);
        assert_eq!((c.r, c.g, c.b, c.a), (0x1f, 0x3a, 0x5f, 0xff));
        assert_eq!(c.to_hex(), "#1f3a5f");
        assert_eq!(c.opacity(), 1.0);
        let faded = Color::BLACK.with_opacity(0.5);
        assert_eq!(faded.to_hex(), "#000000");
        assert_eq!(faded.a, 128);
    }

    #[test]
    fn test_resolve_style() {
        let red = resolve_style("aspects-red").unwrap();
        assert_eq!(red.background, ASPECTS_RED);
        assert!(resolve_style("bg-aspects-red").is_none());
        assert_eq!(style_tokens().count(), PALETTE.len());
    }
}
