use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Movie;

/// A physical copy of one or more movies (a disc or box insert), optionally
/// placed on a shelf at a position.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PhysicalMedia {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    /// Shelf this item sits on; cleared when the shelf is deleted
    pub shelf_id: Option<i64>,
    /// 1-based slot on the shelf, unique within the shelf when present;
    /// unplaced items all carry no position
    pub position_on_shelf: Option<i32>,
    /// Packaging profile shared with other items of the same case type
    pub case_profile_id: i64,
    /// Owning collection, if any; cleared when the collection is deleted
    pub collection_id: Option<i64>,
    pub notes: String,
}

/// A physical media item together with the movies it carries
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PhysicalMediaWithMovies {
    pub media: PhysicalMedia,
    pub movies: Vec<Movie>,
}

/// Request body for creating a new physical media item
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePhysicalMedia {
    /// Movies carried by this item
    #[serde(default)]
    pub movie_ids: Vec<i64>,
    pub shelf_id: Option<i64>,
    pub position_on_shelf: Option<i32>,
    pub case_profile_id: i64,
    pub collection_id: Option<i64>,
    #[serde(default)]
    pub notes: String,
}

/// Request body for placing a physical media item on a shelf
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssignShelf {
    pub shelf_id: i64,
    pub position_on_shelf: Option<i32>,
}
