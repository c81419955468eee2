//! Millimeter measurements shared by case and shelf profiles.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A stacking axis on a shelf.
///
/// Depth is deliberately not an axis: it is the shelf's fixed clearance and
/// never a stacking direction, so an "invalid axis" cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Height,
    Width,
}

/// Largest representable measurement: 999.99 mm.
pub const MAX_MM: Decimal = Decimal::from_parts(99999, 0, 0, false, 2);

/// Error when a measurement is outside the representable range.
#[derive(Debug, Clone, Error)]
pub enum DimensionError {
    /// Measurements are physical extents and cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// Measurements are capped at 999.99 mm.
    #[error("{field} must be at most 999.99 mm, got {value}")]
    TooLarge { field: &'static str, value: Decimal },

    /// Measurements carry exactly two decimal places.
    #[error("{field} must have at most 2 decimal places, got {value}")]
    TooPrecise { field: &'static str, value: Decimal },
}

/// Width, height and depth of a physical envelope, in millimeters.
///
/// Values are exact decimals normalized to two places; capacity arithmetic
/// over them must not drift, so floats never appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Dimension {
    width: Decimal,
    height: Decimal,
    depth: Decimal,
}

impl Dimension {
    /// Create a validated dimension triple.
    ///
    /// # Errors
    ///
    /// Returns a `DimensionError` if any measurement is negative, larger
    /// than 999.99 mm, or carries more than two decimal places.
    pub fn new(width: Decimal, height: Decimal, depth: Decimal) -> Result<Self, DimensionError> {
        Ok(Self {
            width: validate("width", width)?,
            height: validate("height", height)?,
            depth: validate("depth", depth)?,
        })
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    pub fn height(&self) -> Decimal {
        self.height
    }

    pub fn depth(&self) -> Decimal {
        self.depth
    }

    /// Extent along the given stacking axis.
    pub fn axis_size(&self, axis: Axis) -> Decimal {
        match axis {
            Axis::Height => self.height,
            Axis::Width => self.width,
        }
    }
}

fn validate(field: &'static str, value: Decimal) -> Result<Decimal, DimensionError> {
    if value < Decimal::ZERO {
        return Err(DimensionError::Negative { field, value });
    }
    if value > MAX_MM {
        return Err(DimensionError::TooLarge { field, value });
    }
    if value.scale() > 2 {
        return Err(DimensionError::TooPrecise { field, value });
    }

    // Canonical two-place form, so "128.5" and "128.50" store identically.
    let mut value = value;
    value.rescale(2);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_dimension() {
        let dimension = Dimension::new(dec!(128.50), dec!(148.00), dec!(12.00)).unwrap();
        assert_eq!(dimension.width(), dec!(128.50));
        assert_eq!(dimension.height(), dec!(148.00));
        assert_eq!(dimension.depth(), dec!(12.00));
    }

    #[test]
    fn test_zero_is_allowed() {
        assert!(Dimension::new(dec!(0), dec!(0), dec!(0)).is_ok());
    }

    #[test]
    fn test_negative_rejected() {
        assert!(Dimension::new(dec!(-0.01), dec!(148.00), dec!(12.00)).is_err());
        assert!(Dimension::new(dec!(128.50), dec!(-1), dec!(12.00)).is_err());
    }

    #[test]
    fn test_over_max_rejected() {
        assert!(Dimension::new(dec!(1000.00), dec!(148.00), dec!(12.00)).is_err());
        assert!(Dimension::new(dec!(999.99), dec!(999.99), dec!(999.99)).is_ok());
    }

    #[test]
    fn test_too_precise_rejected() {
        assert!(Dimension::new(dec!(128.505), dec!(148.00), dec!(12.00)).is_err());
    }

    #[test]
    fn test_normalized_to_two_places() {
        let dimension = Dimension::new(dec!(128.5), dec!(148), dec!(12)).unwrap();
        assert_eq!(dimension.width().to_string(), "128.50");
        assert_eq!(dimension.height().to_string(), "148.00");
        assert_eq!(dimension.depth().to_string(), "12.00");
    }

    #[test]
    fn test_axis_size() {
        let dimension = Dimension::new(dec!(130.00), dec!(184.00), dec!(14.00)).unwrap();
        assert_eq!(dimension.axis_size(Axis::Height), dec!(184.00));
        assert_eq!(dimension.axis_size(Axis::Width), dec!(130.00));
    }
}
