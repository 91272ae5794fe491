// SPDX-License-Identifier: MPL-2.0
//! Error type shared by the ambient layers (configuration, localization).
//!
//! The settings form itself has no failure modes; only loading the
//! configuration file and the embedded Fluent resources can go wrong.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Localization Error: {0}")]
    I18n(String),
}

impl Error {
    /// Returns the i18n key of the warning toast shown when this error is
    /// recovered from at startup.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "notification-config-read-error",
            Error::Config(_) => "notification-config-parse-error",
            Error::I18n(_) => "notification-i18n-error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
