// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors produced by the theme file layer.
///
/// Rendering itself never fails: a slide with bad props draws a placeholder
/// instead of propagating an error, so a single broken slide cannot take the
/// deck down. Only theme loading and saving return `Result`.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Theme(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Theme(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Theme(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
