// SPDX-License-Identifier: MPL-2.0
//! Slide components.
//!
//! Each submodule is one presentational component: a stateless `view`
//! function taking its props and a [`crate::deck::ViewContext`], returning
//! an [`iced::Element`]. Components never own deck state; the host
//! re-invokes them when the position or theme changes.
//!
//! - [`image_grid`] - even-fraction grid of images
//! - [`media_slide`] - centered image/video slide with optional title
//! - [`text_block`] - viewport-relative margin around arbitrary content
//! - [`progress_bar`] - deck progress derived from the current position
//! - [`quote`] - themed callout with a solid left rule
//! - [`code_block`] - syntax-highlighted source listing

pub mod code_block;
pub mod image_grid;
pub mod media_slide;
pub mod progress_bar;
pub mod quote;
pub mod text_block;
