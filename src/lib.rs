// SPDX-License-Identifier: MPL-2.0
//! `iced_deck` is a set of presentational slide components for composing
//! slide decks with the Iced GUI framework.
//!
//! The hosting application owns the deck itself: navigation, keyboard
//! handling, window management, and the render loop. This crate provides
//! the leaf views (image and video slides, an image grid, text blocks, a
//! progress bar, a code block, a quote callout) plus the layout and
//! theming contract they share.
//!
//! Every component is a pure function of its props and an explicit
//! [`deck::ViewContext`]. There is no internal state and no side effect;
//! when the deck position or theme changes, the host re-invokes the view
//! functions.

#![doc(html_root_url = "https://docs.rs/iced_deck/0.1.0")]

pub mod components;
pub mod deck;
pub mod design_tokens;
pub mod error;
pub mod style;
pub mod styles;
pub mod theme;
