// SPDX-License-Identifier: MPL-2.0
//! Syntax-highlighted code listing.
//!
//! Tokenization is delegated entirely to Iced's highlighter (syntect
//! underneath): this component only selects the language, fixes the dark
//! color scheme, and lays the returned spans out line by line. Source text
//! reaches the highlighter verbatim; ranges it does not cover keep their
//! original text, uncolored.

use crate::design_tokens::{spacing, typography};
use crate::styles;
use iced::advanced::text::Highlighter as _;
use iced::highlighter::{self, Highlighter};
use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Font};
use std::ops::Range;

/// Fixed dark scheme for code slides, independent of the deck theme.
const CODE_THEME: highlighter::Theme = highlighter::Theme::Base16Mocha;

/// Props for the code block.
#[derive(Debug, Clone, Copy)]
pub struct CodeBlockProps<'a> {
    /// Language tag handed to the highlighter, e.g. `"rust"` or `"json"`.
    /// Unknown tags fall back to plain text; that is the highlighter's
    /// concern, not this component's.
    pub language: &'a str,
    /// Literal source text.
    pub source: &'a str,
}

/// Render the listing.
#[must_use]
pub fn view<'a, Message: 'a>(props: CodeBlockProps<'a>) -> Element<'a, Message> {
    let mut tokenizer = Highlighter::new(&highlighter::Settings {
        theme: CODE_THEME,
        token: props.language.to_owned(),
    });

    let mut listing = Column::new();
    for line in props.source.lines() {
        if line.is_empty() {
            // A blank row would collapse; a single space keeps line height.
            listing = listing.push(code_text(" ".to_owned(), None));
            continue;
        }

        let spans: Vec<_> = tokenizer
            .highlight_line(line)
            .map(|(range, highlight)| (range, highlight.color()))
            .collect();

        let mut row = Row::new();
        for (fragment, color) in line_segments(line, spans) {
            row = row.push(code_text(fragment, color));
        }
        listing = listing.push(row);
    }

    Container::new(listing)
        .padding(spacing::CALLOUT_PADDING)
        .style(styles::code_surface)
        .into()
}

fn code_text<'a, Message: 'a>(fragment: String, color: Option<Color>) -> Element<'a, Message> {
    let mut text = Text::new(fragment)
        .font(Font::MONOSPACE)
        .size(typography::CODE);
    if let Some(color) = color {
        text = text.color(color);
    }
    text.into()
}

/// Split one line into colored segments. Highlighter ranges are clamped to
/// the line; gaps between and after them keep their original text with no
/// color, so concatenating the segments reproduces the line verbatim.
fn line_segments(
    line: &str,
    spans: Vec<(Range<usize>, Option<Color>)>,
) -> Vec<(String, Option<Color>)> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for (range, color) in spans {
        let start = range.start.min(line.len()).max(cursor);
        let end = range.end.min(line.len()).max(start);

        if start > cursor {
            segments.push((line[cursor..start].to_owned(), None));
        }
        if end > start {
            segments.push((line[start..end].to_owned(), color));
        }
        cursor = cursor.max(end);
    }

    if cursor < line.len() {
        segments.push((line[cursor..].to_owned(), None));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::advanced::text::Highlighter as _;

    fn joined(line: &str, spans: Vec<(Range<usize>, Option<Color>)>) -> String {
        line_segments(line, spans)
            .into_iter()
            .map(|(fragment, _)| fragment)
            .collect()
    }

    #[test]
    fn segments_reproduce_the_line_verbatim() {
        let spans = vec![
            (0..1, Some(Color::WHITE)),
            (1..2, Some(Color::BLACK)),
        ];
        assert_eq!(joined("{}", spans), "{}");
    }

    #[test]
    fn uncovered_gaps_keep_their_text() {
        let spans = vec![(2..5, Some(Color::WHITE))];
        let segments = line_segments("a bcd ef", spans);

        assert_eq!(segments[0], ("a ".to_owned(), None));
        assert_eq!(segments[1], ("bcd".to_owned(), Some(Color::WHITE)));
        assert_eq!(segments[2], (" ef".to_owned(), None));
    }

    #[test]
    fn no_spans_yield_one_uncolored_segment() {
        let segments = line_segments("plain text", Vec::new());
        assert_eq!(segments, vec![("plain text".to_owned(), None)]);
    }

    #[test]
    fn out_of_bounds_ranges_are_clamped() {
        let spans = vec![(0..99, Some(Color::WHITE))];
        assert_eq!(joined("ab", spans), "ab");
    }

    #[test]
    fn json_braces_pass_through_the_highlighter_verbatim() {
        let mut tokenizer = Highlighter::new(&highlighter::Settings {
            theme: CODE_THEME,
            token: "json".to_owned(),
        });
        let spans: Vec<_> = tokenizer
            .highlight_line("{}")
            .map(|(range, highlight)| (range, highlight.color()))
            .collect();

        assert_eq!(joined("{}", spans), "{}");
    }

    #[test]
    fn code_block_builds_for_multiline_source() {
        let props = CodeBlockProps {
            language: "rust",
            source: "fn main() {\n\n    println!(\"hi\");\n}",
        };
        let _element: Element<'_, ()> = view(props);
    }
}
