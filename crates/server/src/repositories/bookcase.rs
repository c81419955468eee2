use sqlx::SqlitePool;

use crate::models::{Bookcase, CreateBookcase, Pagination};

/// Common SELECT fields for bookcase queries
const SELECT_BOOKCASE: &str = r#"
    SELECT
        id, created_at, updated_at,
        name, description, location
    FROM bookcase
"#;

pub struct BookcaseRepository;

impl BookcaseRepository {
    /// Create a new bookcase
    pub async fn create(pool: &SqlitePool, data: CreateBookcase) -> Result<Bookcase, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO bookcase (name, description, location)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.location)
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a bookcase by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Bookcase>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_BOOKCASE);
        sqlx::query_as::<_, Bookcase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bookcases
    pub async fn list(
        pool: &SqlitePool,
        pagination: Pagination,
    ) -> Result<Vec<Bookcase>, sqlx::Error> {
        let query = format!("{} ORDER BY id ASC LIMIT $1 OFFSET $2", SELECT_BOOKCASE);
        sqlx::query_as::<_, Bookcase>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all bookcases
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookcase")
            .fetch_one(pool)
            .await
    }

    /// Delete a bookcase by ID; its shelves go with it
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bookcase WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
