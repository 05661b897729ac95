// SPDX-License-Identifier: MPL-2.0
//! Centered media slides, image and video variants.
//!
//! Both variants center their media on both axes, render an optional title
//! above it, and bound the media to the merged [`MediaStyle`] (80% of the
//! viewport on both axes by default, intrinsic on the unconstrained axis so
//! the aspect ratio is preserved). Caller overrides win per field.
//!
//! Decoding and playback belong to the host's media pipeline: the video
//! variant receives already-decoded frames and only fixes the playback
//! policy ([`Playback::SLIDE`]: always autoplaying, looping, and muted, with
//! no user controls).

use crate::deck::ViewContext;
use crate::design_tokens::{palette, spacing, typography};
use crate::style::{MediaStyle, StyleOverride};
use crate::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::{self, Image};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length, Size};

/// Props for the image slide.
#[derive(Debug, Clone, Default)]
pub struct ImageSlideProps<'a> {
    /// Image to display. A missing source renders a placeholder instead of
    /// failing; one broken slide must not take the deck down.
    pub source: Option<image::Handle>,
    /// Optional title rendered above the media, centered.
    pub title: Option<&'a str>,
    /// Style overrides merged over [`MediaStyle::SLIDE_DEFAULT`].
    pub style: StyleOverride,
}

/// Props for the video slide.
#[derive(Debug, Clone, Default)]
pub struct VideoSlideProps<'a> {
    /// Current decoded frame, supplied by the host's video pipeline.
    pub frame: Option<image::Handle>,
    /// Optional title rendered above the media, centered.
    pub title: Option<&'a str>,
    /// Style overrides merged over [`MediaStyle::SLIDE_DEFAULT`].
    pub style: StyleOverride,
}

/// Playback policy for slide video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
}

impl Playback {
    /// Slide video always autoplays, loops, and stays muted. There are no
    /// user controls and no prop can override this.
    pub const SLIDE: Self = Self {
        autoplay: true,
        looped: true,
        muted: true,
    };
}

impl Default for Playback {
    fn default() -> Self {
        Self::SLIDE
    }
}

/// The playback policy the host should apply to slide video.
#[must_use]
pub fn playback() -> Playback {
    Playback::SLIDE
}

/// Render an image slide.
#[must_use]
pub fn image_view<'a, Message: 'a>(
    ctx: &ViewContext<'_>,
    props: ImageSlideProps<'a>,
) -> Element<'a, Message> {
    let style = MediaStyle::SLIDE_DEFAULT.merged(props.style);
    let media = match props.source {
        Some(handle) => bounded_media(ctx.viewport, style, handle),
        None => missing_media("missing image"),
    };
    slide_frame(props.title, media)
}

/// Render a video slide from the host-decoded current frame.
#[must_use]
pub fn video_view<'a, Message: 'a>(
    ctx: &ViewContext<'_>,
    props: VideoSlideProps<'a>,
) -> Element<'a, Message> {
    let style = MediaStyle::SLIDE_DEFAULT.merged(props.style);
    let media = match props.frame {
        Some(handle) => bounded_media(ctx.viewport, style, handle),
        None => missing_media("missing video"),
    };
    slide_frame(props.title, media)
}

/// Center the media on both axes, with the optional title above it.
fn slide_frame<'a, Message: 'a>(
    title: Option<&'a str>,
    media: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::TITLE_GAP)
        .align_x(Horizontal::Center);

    if let Some(title) = title {
        content = content.push(Text::new(title).size(typography::TITLE));
    }
    content = content.push(media);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Size the media per the merged style, bounded against the viewport.
fn bounded_media<'a, Message: 'a>(
    viewport: Size,
    style: MediaStyle,
    handle: image::Handle,
) -> Element<'a, Message> {
    let media = Image::new(handle)
        .width(style.width.resolve(viewport.width))
        .height(style.height.resolve(viewport.height));

    let mut bounded = Container::new(media);
    if let Some(max_width) = style.max_width.resolve_limit(viewport.width) {
        bounded = bounded.max_width(max_width);
    }
    if let Some(max_height) = style.max_height.resolve_limit(viewport.height) {
        bounded = bounded.max_height(max_height);
    }
    bounded.into()
}

/// Visible stand-in for absent media.
fn missing_media<'a, Message: 'a>(label: &'static str) -> Element<'a, Message> {
    Container::new(
        Text::new(label)
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .padding(spacing::CALLOUT_PADDING)
    .style(styles::flat(palette::GRAY_100))
    .into()
}
