// SPDX-License-Identifier: MPL-2.0
//! Deck theme: the semantic color palette shared across the component tree.
//!
//! The theme is produced by the host (usually loaded once from a
//! `theme.toml`, see [`file`]) and handed to components by reference
//! through [`crate::deck::ViewContext`]. Components read it and never
//! mutate it. Optional entries fall back to component-local defaults.

pub mod file;

pub use file::{load, load_from_path, save, save_to_path};

use crate::design_tokens::palette;
use crate::error::{Error, Result};
use iced::Color;

/// Semantic colors consumed by the slide components.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckTheme {
    /// Surface color behind callouts such as the quote block.
    pub backdrop: Color,
    /// Primary accent, used for the quote's left rule.
    pub primary: Color,
    /// Default text color.
    pub text: Color,
    /// Background of the progress bar track. Optional; the progress bar
    /// falls back to white when absent.
    pub progress_track: Option<Color>,
}

impl Default for DeckTheme {
    fn default() -> Self {
        Self {
            backdrop: palette::GRAY_100,
            primary: palette::ACCENT,
            text: palette::GRAY_900,
            progress_track: None,
        }
    }
}

impl DeckTheme {
    /// Track background for the progress bar, falling back to white when
    /// the theme does not define one.
    #[must_use]
    pub fn progress_track_or_default(&self) -> Color {
        self.progress_track.unwrap_or(palette::WHITE)
    }
}

/// Parse a `#rgb` or `#rrggbb` hex string into a [`Color`].
pub fn parse_hex(value: &str) -> Result<Color> {
    let digits = value
        .strip_prefix('#')
        .ok_or_else(|| Error::Theme(format!("color {value:?} is missing a leading '#'")))?;

    // Byte indexing below is only safe on ASCII input.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::Theme(format!(
            "color {value:?} has invalid hex digits"
        )));
    }

    let component = |pair: &str| {
        u8::from_str_radix(pair, 16)
            .map_err(|_| Error::Theme(format!("color {value:?} has invalid hex digits")))
    };

    let (r, g, b) = match digits.len() {
        // Shorthand: each digit doubles, "#fff" == "#ffffff".
        3 => {
            let expand = |i: usize| {
                let d = &digits[i..=i];
                component(&format!("{d}{d}"))
            };
            (expand(0)?, expand(1)?, expand(2)?)
        }
        6 => (
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        ),
        _ => {
            return Err(Error::Theme(format!(
                "color {value:?} must have 3 or 6 hex digits"
            )))
        }
    };

    Ok(Color::from_rgb8(r, g, b))
}

/// Format a [`Color`] as a lowercase `#rrggbb` hex string. Alpha is not
/// persisted; theme colors are opaque.
#[must_use]
pub fn format_hex(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}
