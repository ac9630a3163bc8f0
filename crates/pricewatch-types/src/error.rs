//! Error types for pricewatch core types.

use thiserror::Error;

/// Error for an invalid alert threshold.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    /// Threshold is NaN or infinite.
    #[error("Threshold must be a finite number, got {0}")]
    NotFinite(f64),

    /// Threshold is zero or negative.
    #[error("Threshold must be greater than zero, got {0}")]
    NotPositive(f64),
}

/// Error returned when parsing an unknown asset kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown asset kind: {0}. Valid options: crypto, index")]
pub struct AssetKindParseError(pub String);
