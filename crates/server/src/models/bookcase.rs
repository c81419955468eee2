use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A named, located container of ordered shelves.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Bookcase {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub name: String,
    pub description: String,
    /// Where the bookcase stands, e.g. "living room"
    pub location: String,
}

/// Request body for creating a new bookcase
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBookcase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
}
