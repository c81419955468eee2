use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

use super::Dimension;

/// Disc packaging format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MediaFormat {
    #[serde(rename = "dvd")]
    Dvd,
    #[serde(rename = "bluray")]
    BluRay,
    #[serde(rename = "vhs")]
    Vhs,
    #[serde(rename = "4k_uhd")]
    Uhd4k,
}

impl MediaFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFormat::Dvd => "dvd",
            MediaFormat::BluRay => "bluray",
            MediaFormat::Vhs => "vhs",
            MediaFormat::Uhd4k => "4k_uhd",
        }
    }
}

/// Error when a stored format value is not one of the known formats.
#[derive(Debug, Clone, Error)]
#[error("Unknown media format: {0}")]
pub struct ParseMediaFormatError(String);

impl FromStr for MediaFormat {
    type Err = ParseMediaFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dvd" => Ok(MediaFormat::Dvd),
            "bluray" => Ok(MediaFormat::BluRay),
            "vhs" => Ok(MediaFormat::Vhs),
            "4k_uhd" => Ok(MediaFormat::Uhd4k),
            other => Err(ParseMediaFormatError(other.to_string())),
        }
    }
}

/// Shared case envelope for one class of disc packaging (e.g. "standard
/// Blu-ray case"). Many physical media reference one profile, so the profile
/// cannot be deleted while any of them remain.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MediaCaseProfile {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub format: MediaFormat,
    /// Human-readable label, e.g. "Blu-ray (US Standard)"
    pub description: String,
    pub dimension: Dimension,
}

/// Request body for creating a new media case profile
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMediaCaseProfile {
    pub format: MediaFormat,
    pub description: String,
    /// Width in millimeters (max 999.99, two decimal places)
    pub width: Decimal,
    /// Height in millimeters
    pub height: Decimal,
    /// Depth in millimeters
    pub depth: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trip() {
        for format in [
            MediaFormat::Dvd,
            MediaFormat::BluRay,
            MediaFormat::Vhs,
            MediaFormat::Uhd4k,
        ] {
            assert_eq!(format.as_str().parse::<MediaFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!("betamax".parse::<MediaFormat>().is_err());
    }
}
