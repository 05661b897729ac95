// SPDX-License-Identifier: MPL-2.0
//! Even-fraction image grid.
//!
//! Lays a sequence of images out in `columns` equal-width tracks with a
//! fixed gap on both axes. Images take an explicit width/height when the
//! caller provides one, intrinsic size otherwise. An empty image list
//! renders an empty grid; there are no error cases.

use crate::deck::ViewContext;
use crate::design_tokens::spacing;
use iced::widget::image::{self, Image};
use iced::widget::{Column, Container, Row, Space};
use iced::{Element, Length};

/// Props for the image grid.
#[derive(Debug, Clone, Default)]
pub struct ImageGridProps<'a> {
    /// Number of grid columns. Defaults to 1 when absent or zero.
    pub columns: Option<usize>,
    /// Images in display order, one cell each.
    pub images: &'a [image::Handle],
    /// Explicit cell image width in pixels; intrinsic when absent.
    pub image_width: Option<f32>,
    /// Explicit cell image height in pixels; intrinsic when absent.
    pub image_height: Option<f32>,
}

/// Number of tracks the grid template allocates. Absent or zero column
/// counts collapse to a single track.
#[must_use]
pub fn track_count(columns: Option<usize>) -> usize {
    columns.unwrap_or(1).max(1)
}

/// The grid template: one equal-width fraction per track.
#[must_use]
pub fn tracks(columns: Option<usize>) -> Vec<Length> {
    vec![Length::FillPortion(1); track_count(columns)]
}

/// Number of grid rows needed for `image_count` cells.
#[must_use]
pub fn row_count(image_count: usize, columns: Option<usize>) -> usize {
    image_count.div_ceil(track_count(columns))
}

/// Render the grid.
#[must_use]
pub fn view<'a, Message: 'a>(
    _ctx: &ViewContext<'_>,
    props: ImageGridProps<'a>,
) -> Element<'a, Message> {
    let columns = track_count(props.columns);
    let cell_width = fixed_or_intrinsic(props.image_width);
    let cell_height = fixed_or_intrinsic(props.image_height);

    let mut grid = Column::new().spacing(spacing::GRID_GAP);

    for row_images in props.images.chunks(columns) {
        let mut row = Row::new().spacing(spacing::GRID_GAP);

        for handle in row_images {
            let cell = Image::new(handle)
                .width(cell_width)
                .height(cell_height);
            row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        }
        // Blank cells keep the last row's tracks as wide as the others.
        for _ in row_images.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }

        grid = grid.push(row);
    }

    grid.into()
}

fn fixed_or_intrinsic(size: Option<f32>) -> Length {
    size.map_or(Length::Shrink, Length::Fixed)
}
