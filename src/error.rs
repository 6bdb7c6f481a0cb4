//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Input validation failures carry the offending values; resampling, buffer and
//! configuration errors from the underlying crates are converted transparently.
use thiserror::Error;

use crate::core::insets::CapInsets;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid cap insets {insets} for {width}x{height} source: {reason}")]
    InvalidInsets {
        insets: CapInsets,
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("Invalid target size {width}x{height}: {reason}")]
    InvalidTargetSize {
        width: usize,
        height: usize,
        reason: String,
    },

    #[error("Invalid raster: {reason}")]
    InvalidRaster { reason: String },

    #[error("Resampling error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Pixel buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_insets(
        insets: CapInsets,
        (width, height): (usize, usize),
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidInsets {
            insets,
            width,
            height,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_target(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Error::InvalidTargetSize {
            width,
            height,
            reason: reason.into(),
        }
    }
}
