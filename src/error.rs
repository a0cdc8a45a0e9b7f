// SPDX-License-Identifier: MPL-2.0
use crate::api::ApiError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Api(ApiError),
    Image(ImageError),
}

/// Problems with a file picked for upload.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// The file could not be read from disk
    Unreadable(String),

    /// The file claims to be an image but could not be decoded
    Undecodable(String),
}

impl ImageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ImageError::Unreadable(_) => "error-image-unreadable",
            ImageError::Undecodable(_) => "error-image-undecodable",
        }
    }

    /// Returns the underlying detail, used as the `detail` i18n argument.
    #[must_use]
    pub fn detail(&self) -> &str {
        match self {
            ImageError::Unreadable(msg) | ImageError::Undecodable(msg) => msg,
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Unreadable(msg) => write!(f, "Cannot read image: {}", msg),
            ImageError::Undecodable(msg) => write!(f, "Cannot decode image: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Image(err)
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
