use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::decode_dimension;
use crate::models::{Dimension, Pagination, ShelfProfile};

/// Common SELECT fields for shelf profile queries
const SELECT_SHELF_PROFILE: &str = r#"
    SELECT
        id, created_at, updated_at,
        width, height, depth
    FROM shelf_profile
"#;

pub struct ShelfProfileRepository;

impl ShelfProfileRepository {
    /// Create a new shelf profile
    pub async fn create(
        pool: &SqlitePool,
        dimension: Dimension,
    ) -> Result<ShelfProfile, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO shelf_profile (width, height, depth)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(dimension.width().to_string())
        .bind(dimension.height().to_string())
        .bind(dimension.depth().to_string())
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a shelf profile by ID
    pub async fn get_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<ShelfProfile>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_SHELF_PROFILE);
        let row = sqlx::query_as::<_, ShelfProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List shelf profiles
    pub async fn list(
        pool: &SqlitePool,
        pagination: Pagination,
    ) -> Result<Vec<ShelfProfile>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY id ASC LIMIT $1 OFFSET $2",
            SELECT_SHELF_PROFILE
        );
        let rows = sqlx::query_as::<_, ShelfProfileRow>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Count all shelf profiles
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shelf_profile")
            .fetch_one(pool)
            .await
    }

    /// Delete a shelf profile by ID. Fails with a foreign key violation
    /// while any shelf still references it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shelf_profile WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ShelfProfileRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    width: String,
    height: String,
    depth: String,
}

impl TryFrom<ShelfProfileRow> for ShelfProfile {
    type Error = sqlx::Error;

    fn try_from(row: ShelfProfileRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            dimension: decode_dimension(&row.width, &row.height, &row.depth)?,
        })
    }
}
