// SPDX-License-Identifier: MPL-2.0
//! Loading and saving deck themes as `theme.toml` files.
//!
//! # Examples
//!
//! ```no_run
//! use iced_deck::theme::{self, DeckTheme};
//!
//! // Load the user's theme, or start from the defaults.
//! let deck_theme = theme::load().unwrap_or_default();
//!
//! // Persist changes.
//! theme::save(&deck_theme).expect("failed to save theme");
//! ```

use super::{format_hex, parse_hex, DeckTheme};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const THEME_FILE: &str = "theme.toml";
const APP_NAME: &str = "iced_deck";

/// On-disk form of a theme. Colors are hex strings; every key is optional
/// and missing keys fall back to the [`DeckTheme`] defaults.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    colors: ColorTable,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ColorTable {
    backdrop: Option<String>,
    primary: Option<String>,
    text: Option<String>,
    progress_track: Option<String>,
}

impl ThemeFile {
    fn into_theme(self) -> Result<DeckTheme> {
        let defaults = DeckTheme::default();
        let colors = self.colors;

        let or_default = |value: Option<String>, fallback| match value {
            Some(hex) => parse_hex(&hex),
            None => Ok(fallback),
        };

        Ok(DeckTheme {
            backdrop: or_default(colors.backdrop, defaults.backdrop)?,
            primary: or_default(colors.primary, defaults.primary)?,
            text: or_default(colors.text, defaults.text)?,
            progress_track: colors
                .progress_track
                .map(|hex| parse_hex(&hex))
                .transpose()?,
        })
    }

    fn from_theme(theme: &DeckTheme) -> Self {
        Self {
            colors: ColorTable {
                backdrop: Some(format_hex(theme.backdrop)),
                primary: Some(format_hex(theme.primary)),
                text: Some(format_hex(theme.text)),
                progress_track: theme.progress_track.map(format_hex),
            },
        }
    }
}

fn default_theme_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(THEME_FILE);
        path
    })
}

/// Load the theme from the default configuration directory, falling back to
/// [`DeckTheme::default`] when no file exists.
pub fn load() -> Result<DeckTheme> {
    if let Some(path) = default_theme_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(DeckTheme::default())
}

/// Save the theme to the default configuration directory.
pub fn save(theme: &DeckTheme) -> Result<()> {
    if let Some(path) = default_theme_path() {
        return save_to_path(theme, &path);
    }
    Ok(())
}

/// Load a theme from a specific path.
pub fn load_from_path(path: &Path) -> Result<DeckTheme> {
    let content = fs::read_to_string(path)?;
    let file: ThemeFile = toml::from_str(&content)?;
    file.into_theme()
}

/// Save a theme to a specific path, creating parent directories as needed.
pub fn save_to_path(theme: &DeckTheme, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(&ThemeFile::from_theme(theme))?;
    fs::write(path, content)?;
    Ok(())
}
