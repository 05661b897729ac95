// SPDX-License-Identifier: MPL-2.0
//! Shared container styles.

use crate::design_tokens::palette;
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Flat single-color surface, used for the progress bar track and fill and
/// for the quote callout layers.
pub fn flat(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Fixed dark surface behind highlighted code, independent of the active
/// Iced theme so code keeps its contrast in light decks.
pub fn code_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::CODE_BACKDROP)),
        ..Default::default()
    }
}
