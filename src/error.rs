use crate::models::{FailureReason, Region};
use thiserror::Error;

/// Why a payload is not a usable WiFi credential string
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Payload lacks the `WIFI:` prefix
    #[error("payload does not start with `WIFI:`")]
    MissingPrefix,

    /// Scan finished without a non-empty `S:` field
    #[error("payload has no SSID")]
    EmptySsid,
}

/// Failure of one stage of the local decode pipeline
#[derive(Error, Debug)]
pub enum ScanError {
    /// Width or height is zero
    #[error("region has zero width or height")]
    EmptyRegion,

    /// Region extends past the decoded image
    #[error("region {region:?} does not fit in a {image_width}x{image_height} image")]
    RegionOutOfBounds {
        /// Requested region
        region: Region,
        /// Decoded image width
        image_width: u32,
        /// Decoded image height
        image_height: u32,
    },

    /// Source could not be read or decoded
    #[error("failed to load image: {0}")]
    ImageLoad(String),

    /// No symbol could be located and decoded
    #[error("no QR symbol found")]
    NotFound,

    /// Decoded text is not a WiFi credential string
    #[error("payload rejected: {0}")]
    Rejected(#[from] ParseError),
}

impl From<image::ImageError> for ScanError {
    fn from(err: image::ImageError) -> Self {
        ScanError::ImageLoad(err.to_string())
    }
}

impl From<&ScanError> for FailureReason {
    fn from(err: &ScanError) -> Self {
        match err {
            ScanError::EmptyRegion
            | ScanError::RegionOutOfBounds { .. }
            | ScanError::ImageLoad(_) => FailureReason::ImageProcessing,
            ScanError::NotFound => FailureReason::NoSymbolFound,
            ScanError::Rejected(_) => FailureReason::NotWifiPayload,
        }
    }
}

/// Result alias for pipeline stages
pub type Result<T> = std::result::Result<T, ScanError>;
