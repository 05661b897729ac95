// SPDX-License-Identifier: MPL-2.0
//! Style-override merge: the sizing contract shared by the media slides
//! and the text block.
//!
//! A component starts from its default [`MediaStyle`] and merges a
//! caller-supplied [`StyleOverride`] on top, shallow and last-write-wins:
//! fields the caller sets win, everything else keeps its default. Merging
//! the same override twice is a no-op.

use crate::design_tokens::sizing;
use iced::Length;

/// One dimension of a slide element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Dimension {
    /// Intrinsic size of the content.
    #[default]
    Auto,
    /// Fixed size in logical pixels.
    Px(f32),
    /// Fraction of the matching viewport axis (`Viewport(0.8)` is the
    /// equivalent of CSS `80vw`/`80vh`).
    Viewport(f32),
}

impl Dimension {
    /// Resolve to an Iced [`Length`] against the given viewport extent.
    #[must_use]
    pub fn resolve(self, extent: f32) -> Length {
        match self {
            Dimension::Auto => Length::Shrink,
            Dimension::Px(px) => Length::Fixed(px),
            Dimension::Viewport(fraction) => Length::Fixed(fraction * extent),
        }
    }

    /// Resolve to an upper bound in pixels; `Auto` means unbounded.
    #[must_use]
    pub fn resolve_limit(self, extent: f32) -> Option<f32> {
        match self {
            Dimension::Auto => None,
            Dimension::Px(px) => Some(px),
            Dimension::Viewport(fraction) => Some(fraction * extent),
        }
    }
}

/// Sizing of a media element after defaults and overrides are merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
}

impl MediaStyle {
    /// Default sizing for slide media: intrinsic size, bounded to 80% of
    /// the viewport on both axes so the aspect ratio is preserved.
    pub const SLIDE_DEFAULT: Self = Self {
        width: Dimension::Auto,
        height: Dimension::Auto,
        max_width: Dimension::Viewport(sizing::MEDIA_MAX_FRACTION),
        max_height: Dimension::Viewport(sizing::MEDIA_MAX_FRACTION),
    };

    /// Merge a caller override on top of this style, last-write-wins per
    /// field.
    #[must_use]
    pub fn merged(self, overrides: StyleOverride) -> Self {
        Self {
            width: overrides.width.unwrap_or(self.width),
            height: overrides.height.unwrap_or(self.height),
            max_width: overrides.max_width.unwrap_or(self.max_width),
            max_height: overrides.max_height.unwrap_or(self.max_height),
        }
    }
}

impl Default for MediaStyle {
    fn default() -> Self {
        Self::SLIDE_DEFAULT
    }
}

/// Caller-supplied style overrides. Unset fields keep the component
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverride {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
}

impl StyleOverride {
    /// Override only the width.
    #[must_use]
    pub fn width(width: Dimension) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    /// Override only the height.
    #[must_use]
    pub fn height(height: Dimension) -> Self {
        Self {
            height: Some(height),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_value_wins_on_collision() {
        let merged = MediaStyle::SLIDE_DEFAULT.merged(StyleOverride::width(Dimension::Px(10.0)));

        assert_eq!(merged.width, Dimension::Px(10.0));
        assert_eq!(merged.max_width, Dimension::Viewport(0.8));
        assert_eq!(merged.height, Dimension::Auto);
    }

    #[test]
    fn merge_is_idempotent() {
        let overrides = StyleOverride {
            width: Some(Dimension::Px(10.0)),
            max_height: Some(Dimension::Viewport(0.5)),
            ..StyleOverride::default()
        };

        let once = MediaStyle::SLIDE_DEFAULT.merged(overrides);
        let twice = once.merged(overrides);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_override_keeps_defaults() {
        let merged = MediaStyle::SLIDE_DEFAULT.merged(StyleOverride::default());
        assert_eq!(merged, MediaStyle::SLIDE_DEFAULT);
    }

    #[test]
    fn auto_resolves_to_intrinsic_size() {
        assert_eq!(Dimension::Auto.resolve(1000.0), Length::Shrink);
        assert_eq!(Dimension::Auto.resolve_limit(1000.0), None);
    }

    #[test]
    fn viewport_fraction_resolves_against_extent() {
        assert_eq!(
            Dimension::Viewport(0.8).resolve(1000.0),
            Length::Fixed(800.0)
        );
        assert_eq!(Dimension::Viewport(0.8).resolve_limit(500.0), Some(400.0));
    }

    #[test]
    fn fixed_pixels_ignore_the_viewport() {
        assert_eq!(Dimension::Px(10.0).resolve(1000.0), Length::Fixed(10.0));
        assert_eq!(Dimension::Px(10.0).resolve_limit(1000.0), Some(10.0));
    }
}
