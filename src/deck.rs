// SPDX-License-Identifier: MPL-2.0
//! Ambient deck state passed explicitly into every view function.
//!
//! The host owns the deck position and the theme; components only read
//! them. Instead of an implicit context lookup, each view function takes a
//! [`ViewContext`] so its dependencies are visible in its signature.

use crate::theme::DeckTheme;
use iced::Size;

/// Position of the deck within its slide sequence.
///
/// Owned by the host and copied into the [`ViewContext`] on every render
/// pass. The progress bar derives its fill percentage from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckPosition {
    /// Zero-based index of the current slide.
    pub index: usize,
    /// Total number of slides in the deck.
    pub length: usize,
}

impl DeckPosition {
    /// Create a position from an index and a deck length.
    #[must_use]
    pub fn new(index: usize, length: usize) -> Self {
        Self { index, length }
    }

    /// Display percentage for the current slide: `ceil((index + 1) * 100 / length)`.
    ///
    /// An empty deck (`length == 0`) reports 0 rather than dividing by zero.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        if self.length == 0 {
            return 0;
        }
        ((self.index + 1) * 100).div_ceil(self.length)
    }
}

/// Contextual data needed to render any slide component.
///
/// Built fresh by the host for each render pass. All fields are read-only;
/// components never mutate the theme or the position.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    /// Semantic color palette shared across the deck.
    pub theme: &'a DeckTheme,
    /// Current slide index and deck length.
    pub position: DeckPosition,
    /// Host window size in logical pixels. Reference extent for
    /// viewport-relative dimensions (margins, media bounds, track widths).
    pub viewport: Size,
}

impl<'a> ViewContext<'a> {
    /// Create a context for a render pass.
    #[must_use]
    pub fn new(theme: &'a DeckTheme, position: DeckPosition, viewport: Size) -> Self {
        Self {
            theme,
            position,
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slide_of_four_is_a_quarter() {
        assert_eq!(DeckPosition::new(0, 4).progress_percent(), 25);
    }

    #[test]
    fn last_slide_of_four_is_full() {
        assert_eq!(DeckPosition::new(3, 4).progress_percent(), 100);
    }

    #[test]
    fn second_slide_of_three_rounds_up() {
        assert_eq!(DeckPosition::new(1, 3).progress_percent(), 67);
    }

    #[test]
    fn empty_deck_reports_zero_without_panicking() {
        assert_eq!(DeckPosition::new(0, 0).progress_percent(), 0);
    }

    #[test]
    fn single_slide_deck_is_always_full() {
        assert_eq!(DeckPosition::new(0, 1).progress_percent(), 100);
    }

    #[test]
    fn context_copies_position_and_viewport() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::new(2, 10), Size::new(1280.0, 720.0));
        assert_eq!(ctx.position.index, 2);
        assert_eq!(ctx.viewport.width, 1280.0);
    }
}
