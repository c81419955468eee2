//! Shelves and the physical-fit rules that govern them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

use super::{Axis, Dimension};

/// Stacking orientation of a shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }

    /// The axis along which media accumulate for this orientation.
    pub fn stacking_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Height,
            Orientation::Horizontal => Axis::Width,
        }
    }
}

impl FromStr for Orientation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "horizontal" => Orientation::Horizontal,
            _ => Orientation::Vertical,
        })
    }
}

/// A positioned slot in a bookcase.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Shelf {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    /// Owning bookcase; the shelf is deleted with it
    pub bookcase_id: i64,
    /// 1-based slot index, unique within the bookcase
    pub position_from_top: i32,
    /// Physical envelope of the slot
    pub shelf_profile_id: i64,
    /// Stacking orientation
    pub orientation: Orientation,
}

impl Shelf {
    pub fn stacking_axis(&self) -> Axis {
        self.orientation.stacking_axis()
    }
}

/// Request body for creating a new shelf
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShelf {
    pub bookcase_id: i64,
    /// 1-based slot index (must be unique within the bookcase)
    pub position_from_top: i32,
    pub shelf_profile_id: i64,
    /// Stacking orientation (default: vertical)
    #[serde(default)]
    pub orientation: Orientation,
}

/// Space accounting summary for one shelf.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShelfCapacity {
    pub stacking_axis: Axis,
    pub used_space: Decimal,
    /// Remaining extent along the stacking axis; negative when the shelf is
    /// over-packed, and reported as-is in that case.
    pub available_space: Decimal,
}

/// Outcome of checking one media item against one shelf.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FitCheck {
    /// Could the item sit on an empty version of this shelf?
    pub can_fit: bool,
    /// Does the item fit in the space that is actually left?
    pub can_accommodate: bool,
}

/// Whether a case could ever sit on a shelf with this envelope, ignoring
/// current occupancy.
///
/// Comparisons are inclusive: an exactly-equal measurement fits. Depth is
/// checked regardless of orientation since it is the shelf's fixed
/// clearance.
pub fn case_fits(case: &Dimension, shelf: &Dimension, orientation: Orientation) -> bool {
    let axis = orientation.stacking_axis();
    case.axis_size(axis) <= shelf.axis_size(axis) && case.depth() <= shelf.depth()
}

/// Exact sum of stacking-axis extents over the given occupant cases.
///
/// An empty slice sums to zero, not to an absent value.
pub fn stacked_extent(orientation: Orientation, cases: &[Dimension]) -> Decimal {
    let axis = orientation.stacking_axis();
    cases
        .iter()
        .fold(Decimal::ZERO, |total, case| total + case.axis_size(axis))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn dim(width: Decimal, height: Decimal, depth: Decimal) -> Dimension {
        Dimension::new(width, height, depth).unwrap()
    }

    #[test]
    fn test_stacking_axis() {
        assert_eq!(Orientation::Vertical.stacking_axis(), Axis::Height);
        assert_eq!(Orientation::Horizontal.stacking_axis(), Axis::Width);
    }

    #[test]
    fn test_orientation_from_str() {
        assert_eq!(
            "horizontal".parse::<Orientation>().unwrap(),
            Orientation::Horizontal
        );
        assert_eq!(
            "vertical".parse::<Orientation>().unwrap(),
            Orientation::Vertical
        );
        // Unknown values fall back to the default orientation.
        assert_eq!("".parse::<Orientation>().unwrap(), Orientation::Vertical);
    }

    #[test]
    fn test_case_fits_vertical_boundaries() {
        let shelf = dim(dec!(150.00), dec!(127.00), dec!(20.00));

        // Equality on the stacking axis is a fit.
        assert!(case_fits(
            &dim(dec!(10), dec!(127.00), dec!(15)),
            &shelf,
            Orientation::Vertical
        ));
        assert!(case_fits(
            &dim(dec!(10), dec!(126.99), dec!(15)),
            &shelf,
            Orientation::Vertical
        ));
        assert!(!case_fits(
            &dim(dec!(10), dec!(127.01), dec!(15)),
            &shelf,
            Orientation::Vertical
        ));
    }

    #[test]
    fn test_case_fits_checks_depth_in_both_orientations() {
        let shelf = dim(dec!(150.00), dec!(150.00), dec!(14.00));
        let too_deep = dim(dec!(10), dec!(10), dec!(14.01));
        let exactly_deep = dim(dec!(10), dec!(10), dec!(14.00));

        assert!(!case_fits(&too_deep, &shelf, Orientation::Vertical));
        assert!(!case_fits(&too_deep, &shelf, Orientation::Horizontal));
        assert!(case_fits(&exactly_deep, &shelf, Orientation::Vertical));
        assert!(case_fits(&exactly_deep, &shelf, Orientation::Horizontal));
    }

    #[test]
    fn test_case_fits_orientation_mirror() {
        // fits(vertical, height=a vs b) must equal fits(horizontal, width=a vs b).
        let pairs = [
            (dec!(127.00), dec!(127.00)),
            (dec!(127.00), dec!(128.00)),
            (dec!(128.00), dec!(127.00)),
            (dec!(0.01), dec!(999.99)),
            (dec!(999.99), dec!(0.01)),
        ];

        for (a, b) in pairs {
            let vertical = case_fits(
                &dim(dec!(1), a, dec!(1)),
                &dim(dec!(1), b, dec!(1)),
                Orientation::Vertical,
            );
            let horizontal = case_fits(
                &dim(a, dec!(1), dec!(1)),
                &dim(b, dec!(1), dec!(1)),
                Orientation::Horizontal,
            );
            assert_eq!(vertical, horizontal, "mirror mismatch for {a} vs {b}");
        }
    }

    #[test]
    fn test_stacked_extent_empty_is_zero() {
        assert_eq!(stacked_extent(Orientation::Vertical, &[]), Decimal::ZERO);
        assert_eq!(stacked_extent(Orientation::Horizontal, &[]), Decimal::ZERO);
    }

    #[test]
    fn test_stacked_extent_exact_sum() {
        let cases = [
            dim(dec!(10), dec!(127.27), dec!(12)),
            dim(dec!(10), dec!(10.78), dec!(12)),
        ];
        assert_eq!(
            stacked_extent(Orientation::Vertical, &cases),
            dec!(138.05)
        );
    }

    #[test]
    fn test_stacked_extent_uses_stacking_axis() {
        let cases = [
            dim(dec!(20.00), dec!(30.00), dec!(12)),
            dim(dec!(25.00), dec!(35.00), dec!(12)),
        ];
        assert_eq!(stacked_extent(Orientation::Vertical, &cases), dec!(65.00));
        assert_eq!(
            stacked_extent(Orientation::Horizontal, &cases),
            dec!(45.00)
        );
    }
}
