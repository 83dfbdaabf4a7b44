//! Error taxonomy.
//!
//! - [`ValidationError`]: rejected at the boundary, before classification.
//! - [`DataSourceError`]: composition fetch failures, absorbed by the fallback path.
//! - [`UnknownSoilType`]: strict label parsing; catalog lookups map it to generic entries.

use std::time::Duration;

/// Out-of-range request input. Carries the offending value.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("longitude must be between -180 and 180, got {0}")]
    Longitude(f64),

    #[error("latitude must be between -90 and 90, got {0}")]
    Latitude(f64),

    #[error("depth must be greater than 0 and at most 200 cm, got {0}")]
    Depth(f64),
}

impl ValidationError {
    /// Name of the rejected input field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Longitude(_) => "longitude",
            ValidationError::Latitude(_) => "latitude",
            ValidationError::Depth(_) => "depth",
        }
    }
}

/// Failure talking to the composition provider.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    /// Transport failure (DNS, TLS, connection reset, client timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-2xx status.
    #[error("provider returned {status}: {reason}")]
    Status { status: u16, reason: String },

    /// Body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A texture fraction had no value for the requested depth band.
    #[error("no {property} value for depth band {band}")]
    MissingTexture {
        property: &'static str,
        band: &'static str,
    },

    #[error("composition fetch timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized soil type '{0}'")]
pub struct UnknownSoilType(pub String);
