// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the slide components.
//!
//! Layout constants live here rather than inline in the views so slides
//! built from different components line up on the same scale.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);

    /// Deep navy accent used for the progress bar fill (`#1c344f`).
    pub const ACCENT: Color = Color::from_rgb(0.11, 0.204, 0.31);

    /// Fixed dark surface behind highlighted code (`#23241f`).
    pub const CODE_BACKDROP: Color = Color::from_rgb(0.137, 0.141, 0.122);
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Gap between image grid cells, both axes.
    pub const GRID_GAP: f32 = 30.0;

    /// Default text block margin, percent of the viewport width.
    pub const TEXT_MARGIN_PERCENT: f32 = 5.0;

    /// Gap between a slide title and its media.
    pub const TITLE_GAP: f32 = 20.0;

    /// Space reserved below the progress bar.
    pub const PROGRESS_BOTTOM: f32 = 7.0;

    /// Inner padding of the quote callout and the code block surface.
    pub const CALLOUT_PADDING: f32 = 10.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Media on a slide is bounded to this fraction of the viewport on
    /// both axes, intrinsic on whichever axis stays unconstrained.
    pub const MEDIA_MAX_FRACTION: f32 = 0.8;

    /// Width of the progress bar track as a fraction of the viewport.
    pub const PROGRESS_TRACK_FRACTION: f32 = 0.4;

    /// Height of the progress bar track.
    pub const PROGRESS_TRACK_HEIGHT: f32 = 8.0;

    /// Width of the quote callout's solid left rule.
    pub const QUOTE_RULE_WIDTH: f32 = 10.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Slide titles.
    pub const TITLE: f32 = 40.0;

    /// Body text on slides. Decks are read from a distance.
    pub const BODY: f32 = 24.0;

    /// Highlighted code.
    pub const CODE: f32 = 18.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::GRID_GAP > 0.0);
    assert!(spacing::TEXT_MARGIN_PERCENT >= 0.0);

    assert!(sizing::MEDIA_MAX_FRACTION > 0.0 && sizing::MEDIA_MAX_FRACTION <= 1.0);
    assert!(sizing::PROGRESS_TRACK_FRACTION > 0.0 && sizing::PROGRESS_TRACK_FRACTION <= 1.0);
    assert!(sizing::PROGRESS_TRACK_HEIGHT > 0.0);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CODE);

    assert!(palette::ACCENT.r >= 0.0 && palette::ACCENT.r <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_bound_is_eighty_percent_of_viewport() {
        assert_eq!(sizing::MEDIA_MAX_FRACTION, 0.8);
    }

    #[test]
    fn accent_rounds_to_expected_hex() {
        assert_eq!(crate::theme::format_hex(palette::ACCENT), "#1c344f");
    }
}
