// SPDX-License-Identifier: MPL-2.0
//! Text block: arbitrary content wrapped in a viewport-relative margin.
//!
//! The margin on all four sides equals `margin_percent` (default 5) percent
//! of the viewport width, the equivalent of a CSS `vw` margin. Literal
//! whitespace and line breaks in text children are preserved; Iced's `text`
//! widget renders them as written.

use crate::deck::ViewContext;
use crate::design_tokens::{spacing, typography};
use crate::style::{Dimension, MediaStyle, StyleOverride};
use iced::widget::{Container, Text};
use iced::{Element, Size};

/// Props for the text block.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBlockProps {
    /// Margin as a percentage of the viewport width. Defaults to 5.
    pub margin_percent: Option<f32>,
    /// Style overrides merged over the block defaults (all intrinsic).
    pub style: StyleOverride,
}

/// Block sizing before overrides: intrinsic on every axis.
const BLOCK_DEFAULT: MediaStyle = MediaStyle {
    width: Dimension::Auto,
    height: Dimension::Auto,
    max_width: Dimension::Auto,
    max_height: Dimension::Auto,
};

/// Margin in pixels for a given viewport and optional percentage.
#[must_use]
pub fn margin(viewport: Size, margin_percent: Option<f32>) -> f32 {
    viewport.width * margin_percent.unwrap_or(spacing::TEXT_MARGIN_PERCENT) / 100.0
}

/// Body text at deck scale. Line breaks and runs of spaces in `content`
/// render as written.
#[must_use]
pub fn body(content: &str) -> Text<'_> {
    Text::new(content).size(typography::BODY)
}

/// Render the block around arbitrary child content.
#[must_use]
pub fn view<'a, Message: 'a>(
    ctx: &ViewContext<'_>,
    props: TextBlockProps,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    let style = BLOCK_DEFAULT.merged(props.style);

    let mut block = Container::new(content)
        .padding(margin(ctx.viewport, props.margin_percent))
        .width(style.width.resolve(ctx.viewport.width))
        .height(style.height.resolve(ctx.viewport.height));

    if let Some(max_width) = style.max_width.resolve_limit(ctx.viewport.width) {
        block = block.max_width(max_width);
    }
    if let Some(max_height) = style.max_height.resolve_limit(ctx.viewport.height) {
        block = block.max_height(max_height);
    }

    block.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DeckPosition;
    use crate::theme::DeckTheme;

    #[test]
    fn default_margin_is_five_percent_of_viewport_width() {
        assert_eq!(margin(Size::new(1000.0, 800.0), None), 50.0);
    }

    #[test]
    fn explicit_margin_scales_with_viewport_width() {
        assert_eq!(margin(Size::new(1000.0, 800.0), Some(10.0)), 100.0);
        assert_eq!(margin(Size::new(500.0, 800.0), Some(10.0)), 50.0);
    }

    #[test]
    fn zero_margin_is_allowed() {
        assert_eq!(margin(Size::new(1000.0, 800.0), Some(0.0)), 0.0);
    }

    #[test]
    fn block_builds_around_multiline_text() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::default(), Size::new(1920.0, 1080.0));
        let _element: Element<'_, ()> = view(
            &ctx,
            TextBlockProps::default(),
            body("line one\n  indented line two"),
        );
    }

    #[test]
    fn block_builds_with_width_override() {
        let theme = DeckTheme::default();
        let ctx = ViewContext::new(&theme, DeckPosition::default(), Size::new(1920.0, 1080.0));
        let props = TextBlockProps {
            margin_percent: Some(2.0),
            style: StyleOverride::width(Dimension::Viewport(0.5)),
        };
        let _element: Element<'_, ()> = view(&ctx, props, body("sized"));
    }
}
