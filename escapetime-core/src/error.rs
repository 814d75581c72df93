//! Error types shared by the evaluator and the color mapper.

use thiserror::Error;

/// Broad classification of an [`Error`].
///
/// Every failure in this workspace is a caller contract violation, so there is
/// only one kind. Nothing here is retryable: the operations are pure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("at least 2 colors required, got {count}")]
    TooFewStops { count: usize },

    #[error("interpolation parameter {value} is outside [0, 1]")]
    ParameterOutOfRange { value: f64 },

    #[error("max_iterations must be positive")]
    NonPositiveIterations,

    #[error("invalid bounds: {reason}")]
    InvalidBounds { reason: String },

    #[error("invalid pixel rect: {reason}")]
    InvalidPixelRect { reason: String },

    #[error("zoom factor must be finite and positive, got {factor}")]
    InvalidZoomFactor { factor: f64 },

    #[error("invalid hex color {input:?}")]
    InvalidHexColor { input: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyPalette
            | Error::TooFewStops { .. }
            | Error::ParameterOutOfRange { .. }
            | Error::NonPositiveIterations
            | Error::InvalidBounds { .. }
            | Error::InvalidPixelRect { .. }
            | Error::InvalidZoomFactor { .. }
            | Error::InvalidHexColor { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
