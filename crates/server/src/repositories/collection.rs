use sqlx::SqlitePool;

use crate::models::{Collection, CreateCollection, Movie, Pagination};

/// Common SELECT fields for collection queries
const SELECT_COLLECTION: &str = r#"
    SELECT
        id, created_at, updated_at,
        name
    FROM collection
"#;

pub struct CollectionRepository;

impl CollectionRepository {
    /// Create a new collection
    pub async fn create(
        pool: &SqlitePool,
        data: CreateCollection,
    ) -> Result<Collection, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO collection (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(&data.name)
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a collection by ID
    pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Collection>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_COLLECTION);
        sqlx::query_as::<_, Collection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List collections
    pub async fn list(
        pool: &SqlitePool,
        pagination: Pagination,
    ) -> Result<Vec<Collection>, sqlx::Error> {
        let query = format!("{} ORDER BY name ASC LIMIT $1 OFFSET $2", SELECT_COLLECTION);
        sqlx::query_as::<_, Collection>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all collections
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM collection")
            .fetch_one(pool)
            .await
    }

    /// Distinct movies reachable through the collection's physical media.
    /// A movie carried by two items in the collection appears once.
    pub async fn movies(pool: &SqlitePool, collection_id: i64) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT DISTINCT
                m.id, m.created_at, m.updated_at,
                m.title, m.release_year, m.external_url, m.watched
            FROM movie m
            JOIN physical_media_movie pmm ON pmm.movie_id = m.id
            JOIN physical_media pm ON pm.id = pmm.physical_media_id
            WHERE pm.collection_id = $1
            ORDER BY m.title ASC
            "#,
        )
        .bind(collection_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a collection by ID; its items stay, unassigned, via SET NULL
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM collection WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
