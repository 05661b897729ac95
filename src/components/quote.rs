// SPDX-License-Identifier: MPL-2.0
//! Quote callout.
//!
//! Child content on the theme's backdrop color, set off by a fixed-width
//! solid left rule in the theme's primary color. Children pass through
//! untransformed.

use crate::deck::ViewContext;
use crate::design_tokens::{sizing, spacing};
use crate::styles;
use iced::widget::Container;
use iced::{Element, Length, Padding};

/// Render the callout around arbitrary child content.
#[must_use]
pub fn view<'a, Message: 'a>(
    ctx: &ViewContext<'_>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let body = Container::new(content)
        .padding(spacing::CALLOUT_PADDING)
        .width(Length::Fill)
        .style(styles::flat(ctx.theme.backdrop));

    // The left rule is the outer container's background showing through
    // its asymmetric padding; it always matches the callout's height.
    Container::new(body)
        .padding(Padding {
            left: sizing::QUOTE_RULE_WIDTH,
            ..Padding::ZERO
        })
        .style(styles::flat(ctx.theme.primary))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::text_block;
    use crate::deck::{DeckPosition, ViewContext};
    use crate::theme::DeckTheme;
    use iced::Size;

    #[test]
    fn callout_builds_around_text() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::default(), Size::new(1280.0, 720.0));
        let _element: Element<'_, ()> =
            view(&ctx, text_block::body("Simplicity is prerequisite for reliability."));
    }

    #[test]
    fn callout_builds_with_a_custom_palette() {
        let theme = DeckTheme {
            backdrop: crate::design_tokens::palette::GRAY_900,
            primary: crate::design_tokens::palette::ACCENT,
            ..DeckTheme::default()
        };
        let ctx = ViewContext::new(&theme, DeckPosition::default(), Size::new(1280.0, 720.0));
        let _element: Element<'_, ()> = view(&ctx, text_block::body("quoted"));
    }
}
