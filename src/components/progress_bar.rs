// SPDX-License-Identifier: MPL-2.0
//! Deck progress bar.
//!
//! Derives a fill percentage from the ambient [`DeckPosition`] and draws a
//! fixed-width track with a proportional fill. The track background comes
//! from the theme, falling back to white; the fill color is the fixed
//! accent. Recomputed on every render pass, so the bar follows the host's
//! position updates without keeping state of its own.
//!
//! [`DeckPosition`]: crate::deck::DeckPosition

use crate::deck::ViewContext;
use crate::design_tokens::{palette, sizing, spacing};
use crate::styles;
use iced::alignment::Horizontal;
use iced::widget::{Container, Space};
use iced::{Element, Length, Padding};

/// Fill width in pixels for a track of `track_width` at `percent`. The
/// fill never overflows its track.
#[must_use]
pub fn fill_width(track_width: f32, percent: usize) -> f32 {
    track_width * percent.min(100) as f32 / 100.0
}

/// Render the progress bar.
#[must_use]
pub fn view<'a, Message: 'a>(ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let percent = ctx.position.progress_percent();
    let track_width = ctx.viewport.width * sizing::PROGRESS_TRACK_FRACTION;

    let fill = Container::new(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fixed(fill_width(track_width, percent)))
        .height(Length::Fill)
        .style(styles::flat(palette::ACCENT));

    let track = Container::new(fill)
        .width(Length::Fixed(track_width))
        .height(Length::Fixed(sizing::PROGRESS_TRACK_HEIGHT))
        .style(styles::flat(ctx.theme.progress_track_or_default()));

    Container::new(track)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(Padding {
            bottom: spacing::PROGRESS_BOTTOM,
            ..Padding::ZERO
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{DeckPosition, ViewContext};
    use crate::theme::DeckTheme;
    use iced::Size;

    #[test]
    fn quarter_progress_fills_a_quarter_of_the_track() {
        assert_eq!(fill_width(400.0, 25), 100.0);
    }

    #[test]
    fn full_progress_fills_the_whole_track() {
        assert_eq!(fill_width(400.0, 100), 400.0);
    }

    #[test]
    fn zero_progress_has_no_fill() {
        assert_eq!(fill_width(400.0, 0), 0.0);
    }

    #[test]
    fn fill_never_overflows_the_track() {
        assert_eq!(fill_width(400.0, 150), 400.0);
    }

    #[test]
    fn bar_builds_for_an_empty_deck() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::new(0, 0), Size::new(1280.0, 720.0));
        let _element: Element<'_, ()> = view(&ctx);
    }

    #[test]
    fn bar_builds_mid_deck() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::new(4, 12), Size::new(1280.0, 720.0));
        let _element: Element<'_, ()> = view(&ctx);
    }
}
