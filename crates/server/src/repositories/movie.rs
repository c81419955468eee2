use sqlx::SqlitePool;

use crate::models::{CreateMovie, Movie, MovieFilter, Pagination};

/// Common SELECT fields for movie queries
const SELECT_MOVIE: &str = r#"
    SELECT
        id, created_at, updated_at,
        title, release_year, external_url, watched
    FROM movie
"#;

/// Filter clause shared by list and count; NULL parameters disable the
/// corresponding condition.
const FILTER_MOVIE: &str = r#"
    WHERE ($1 IS NULL OR title LIKE '%' || $1 || '%')
      AND ($2 IS NULL OR release_year = $2)
      AND ($3 IS NULL OR watched = $3)
"#;

pub struct MovieRepository;

impl MovieRepository {
    /// Create a new movie
    pub async fn create(pool: &SqlitePool, data: CreateMovie) -> Result<Movie, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO movie (title, release_year, external_url, watched)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&data.title)
        .bind(data.release_year)
        .bind(&data.external_url)
        .bind(data.watched)
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a movie by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_MOVIE);
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies matching the filter, title-ordered
    pub async fn list(
        pool: &SqlitePool,
        filter: &MovieFilter,
        pagination: Pagination,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "{} {} ORDER BY title ASC, release_year ASC LIMIT $4 OFFSET $5",
            SELECT_MOVIE, FILTER_MOVIE
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(filter.title.as_deref())
            .bind(filter.release_year)
            .bind(filter.watched)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await
    }

    /// Count movies matching the filter
    pub async fn count(pool: &SqlitePool, filter: &MovieFilter) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM movie {}", FILTER_MOVIE);
        sqlx::query_scalar(&query)
            .bind(filter.title.as_deref())
            .bind(filter.release_year)
            .bind(filter.watched)
            .fetch_one(pool)
            .await
    }

    /// Delete a movie by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
