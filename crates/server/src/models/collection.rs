use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A named grouping of physical media items, e.g. a box set. Its movie list
/// is derived transitively from the items.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Collection {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub name: String,
}

/// Request body for creating a new collection
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCollection {
    pub name: String,
}
