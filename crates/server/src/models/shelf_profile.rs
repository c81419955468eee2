use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Dimension;

/// Physical envelope of a shelf, independent of where the shelf sits.
/// Protected from deletion while any shelf references it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShelfProfile {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub dimension: Dimension,
}

/// Request body for creating a new shelf profile
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShelfProfile {
    /// Width in millimeters (max 999.99, two decimal places)
    pub width: Decimal,
    /// Height in millimeters
    pub height: Decimal,
    /// Depth in millimeters
    pub depth: Decimal,
}
