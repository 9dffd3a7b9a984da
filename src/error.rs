//! Crate-wide error type.

use thiserror::Error;

/// Errors produced by noise sampling, texture generation, and mesh centering
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter outside its documented range (zero size, zero octaves, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A non-finite coordinate reached the noise field
    #[error("Non-finite coordinate ({x}, {y}) passed to noise field")]
    InvalidInput { x: f64, y: f64 },

    /// Remap source range with zero width
    #[error("Division by zero: remap source range has zero width (min == max == {0})")]
    DivisionByZero(f64),

    /// Geometry with no derivable extent
    #[error("Geometry has no derivable bounding box")]
    UndefinedBoundingBox,

    /// Filesystem failure while exporting
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encoding failure
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
