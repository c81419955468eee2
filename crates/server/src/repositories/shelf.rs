use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use super::decode_dimension;
use crate::models::{CreateShelf, Dimension, Pagination, Shelf};

/// Common SELECT fields for shelf queries
const SELECT_SHELF: &str = r#"
    SELECT
        id, created_at, updated_at,
        bookcase_id, position_from_top, shelf_profile_id, orientation
    FROM shelf
"#;

pub struct ShelfRepository;

impl ShelfRepository {
    /// Create a new shelf
    pub async fn create(pool: &SqlitePool, data: CreateShelf) -> Result<Shelf, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO shelf (bookcase_id, position_from_top, shelf_profile_id, orientation)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.bookcase_id)
        .bind(data.position_from_top)
        .bind(data.shelf_profile_id)
        .bind(data.orientation.as_str())
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a shelf by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Shelf>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_SHELF);
        let row = sqlx::query_as::<_, ShelfRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Get a shelf together with its profile dimensions
    pub async fn get_with_profile(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<(Shelf, Dimension)>, sqlx::Error> {
        Self::get_with_profile_with_executor(pool, id).await
    }

    /// Get a shelf together with its profile dimensions using a generic
    /// executor (supports transactions)
    pub async fn get_with_profile_with_executor<'e, E>(
        executor: E,
        id: i64,
    ) -> Result<Option<(Shelf, Dimension)>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, ShelfWithProfileRow>(
            r#"
            SELECT
                s.id, s.created_at, s.updated_at,
                s.bookcase_id, s.position_from_top, s.shelf_profile_id, s.orientation,
                p.width, p.height, p.depth
            FROM shelf s
            JOIN shelf_profile p ON p.id = s.shelf_profile_id
            WHERE s.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(ShelfWithProfileRow::into_parts).transpose()
    }

    /// List shelves
    pub async fn list(pool: &SqlitePool, pagination: Pagination) -> Result<Vec<Shelf>, sqlx::Error> {
        let query = format!(
            "{} ORDER BY bookcase_id ASC, position_from_top ASC LIMIT $1 OFFSET $2",
            SELECT_SHELF
        );
        let rows = sqlx::query_as::<_, ShelfRow>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get all shelves of a bookcase, top to bottom
    pub async fn list_by_bookcase(
        pool: &SqlitePool,
        bookcase_id: i64,
    ) -> Result<Vec<Shelf>, sqlx::Error> {
        let query = format!(
            "{} WHERE bookcase_id = $1 ORDER BY position_from_top ASC",
            SELECT_SHELF
        );
        let rows = sqlx::query_as::<_, ShelfRow>(&query)
            .bind(bookcase_id)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Count all shelves
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shelf")
            .fetch_one(pool)
            .await
    }

    /// Delete a shelf by ID; media on it become unshelved via SET NULL
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM shelf WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct ShelfRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    bookcase_id: i64,
    position_from_top: i32,
    shelf_profile_id: i64,
    orientation: String,
}

impl From<ShelfRow> for Shelf {
    fn from(row: ShelfRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            bookcase_id: row.bookcase_id,
            position_from_top: row.position_from_top,
            shelf_profile_id: row.shelf_profile_id,
            orientation: row.orientation.parse().unwrap_or_default(),
        }
    }
}

/// Internal row type for the shelf + profile join
#[derive(Debug, sqlx::FromRow)]
struct ShelfWithProfileRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    bookcase_id: i64,
    position_from_top: i32,
    shelf_profile_id: i64,
    orientation: String,
    width: String,
    height: String,
    depth: String,
}

impl ShelfWithProfileRow {
    fn into_parts(self) -> Result<(Shelf, Dimension), sqlx::Error> {
        let dimension = decode_dimension(&self.width, &self.height, &self.depth)?;
        let shelf = Shelf {
            id: self.id,
            created_at: self.created_at,
            updated_at: self.updated_at,
            bookcase_id: self.bookcase_id,
            position_from_top: self.position_from_top,
            shelf_profile_id: self.shelf_profile_id,
            orientation: self.orientation.parse().unwrap_or_default(),
        };

        Ok((shelf, dimension))
    }
}
