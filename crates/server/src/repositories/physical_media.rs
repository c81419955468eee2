use sqlx::{Executor, Sqlite, SqlitePool};

use super::decode_dimension;
use crate::models::{CreatePhysicalMedia, Dimension, Movie, Pagination, PhysicalMedia};

/// Common SELECT fields for physical media queries
const SELECT_MEDIA: &str = r#"
    SELECT
        id, created_at, updated_at,
        shelf_id, position_on_shelf, case_profile_id, collection_id, notes
    FROM physical_media
"#;

pub struct PhysicalMediaRepository;

impl PhysicalMediaRepository {
    /// Create a new physical media item together with its movie links
    pub async fn create(
        pool: &SqlitePool,
        data: CreatePhysicalMedia,
    ) -> Result<PhysicalMedia, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO physical_media
                (shelf_id, position_on_shelf, case_profile_id, collection_id, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(data.shelf_id)
        .bind(data.position_on_shelf)
        .bind(data.case_profile_id)
        .bind(data.collection_id)
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await?;

        for movie_id in &data.movie_ids {
            sqlx::query(
                "INSERT INTO physical_media_movie (physical_media_id, movie_id) VALUES ($1, $2)",
            )
            .bind(id)
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a physical media item by ID
    pub async fn get_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<PhysicalMedia>, sqlx::Error> {
        Self::get_by_id_with_executor(pool, id).await
    }

    /// Get a physical media item by ID using a generic executor
    /// (supports transactions)
    pub async fn get_by_id_with_executor<'e, E>(
        executor: E,
        id: i64,
    ) -> Result<Option<PhysicalMedia>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("{} WHERE id = $1", SELECT_MEDIA);
        sqlx::query_as::<_, PhysicalMedia>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// List physical media items
    pub async fn list(
        pool: &SqlitePool,
        pagination: Pagination,
    ) -> Result<Vec<PhysicalMedia>, sqlx::Error> {
        let query = format!("{} ORDER BY id ASC LIMIT $1 OFFSET $2", SELECT_MEDIA);
        sqlx::query_as::<_, PhysicalMedia>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await
    }

    /// Count all physical media items
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM physical_media")
            .fetch_one(pool)
            .await
    }

    /// Get all physical media currently assigned to a shelf
    pub async fn list_by_shelf(
        pool: &SqlitePool,
        shelf_id: i64,
    ) -> Result<Vec<PhysicalMedia>, sqlx::Error> {
        let query = format!(
            "{} WHERE shelf_id = $1 ORDER BY position_on_shelf ASC NULLS LAST",
            SELECT_MEDIA
        );
        sqlx::query_as::<_, PhysicalMedia>(&query)
            .bind(shelf_id)
            .fetch_all(pool)
            .await
    }

    /// Get all physical media carrying a movie
    pub async fn list_by_movie(
        pool: &SqlitePool,
        movie_id: i64,
    ) -> Result<Vec<PhysicalMedia>, sqlx::Error> {
        sqlx::query_as::<_, PhysicalMedia>(
            r#"
            SELECT
                pm.id, pm.created_at, pm.updated_at,
                pm.shelf_id, pm.position_on_shelf, pm.case_profile_id, pm.collection_id, pm.notes
            FROM physical_media pm
            JOIN physical_media_movie pmm ON pmm.physical_media_id = pm.id
            WHERE pmm.movie_id = $1
            ORDER BY pm.id ASC
            "#,
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Get all physical media belonging to a collection
    pub async fn list_by_collection(
        pool: &SqlitePool,
        collection_id: i64,
    ) -> Result<Vec<PhysicalMedia>, sqlx::Error> {
        let query = format!("{} WHERE collection_id = $1 ORDER BY id ASC", SELECT_MEDIA);
        sqlx::query_as::<_, PhysicalMedia>(&query)
            .bind(collection_id)
            .fetch_all(pool)
            .await
    }

    /// Get the movies carried by a physical media item, title-ordered
    pub async fn movies(pool: &SqlitePool, media_id: i64) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT
                m.id, m.created_at, m.updated_at,
                m.title, m.release_year, m.external_url, m.watched
            FROM movie m
            JOIN physical_media_movie pmm ON pmm.movie_id = m.id
            WHERE pmm.physical_media_id = $1
            ORDER BY m.title ASC
            "#,
        )
        .bind(media_id)
        .fetch_all(pool)
        .await
    }

    /// Case dimensions of every item currently assigned to a shelf
    pub async fn occupant_case_dimensions(
        pool: &SqlitePool,
        shelf_id: i64,
    ) -> Result<Vec<Dimension>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CaseDimensionsRow>(
            r#"
            SELECT p.width, p.height, p.depth
            FROM physical_media pm
            JOIN media_case_profile p ON p.id = pm.case_profile_id
            WHERE pm.shelf_id = $1
            "#,
        )
        .bind(shelf_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(CaseDimensionsRow::decode).collect()
    }

    /// Same as `occupant_case_dimensions`, but leaving out one item: an item
    /// being moved onto a shelf it already sits on must not count against
    /// itself. Uses a generic executor (supports transactions).
    pub async fn occupant_case_dimensions_excluding<'e, E>(
        executor: E,
        shelf_id: i64,
        media_id: i64,
    ) -> Result<Vec<Dimension>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, CaseDimensionsRow>(
            r#"
            SELECT p.width, p.height, p.depth
            FROM physical_media pm
            JOIN media_case_profile p ON p.id = pm.case_profile_id
            WHERE pm.shelf_id = $1 AND pm.id <> $2
            "#,
        )
        .bind(shelf_id)
        .bind(media_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(CaseDimensionsRow::decode).collect()
    }

    /// Place an item on a shelf using a generic executor (supports
    /// transactions). Returns false when the item does not exist.
    pub async fn assign_with_executor<'e, E>(
        executor: E,
        media_id: i64,
        shelf_id: i64,
        position_on_shelf: Option<i32>,
    ) -> Result<bool, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
            UPDATE physical_media SET
                shelf_id = $1,
                position_on_shelf = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $3
            "#,
        )
        .bind(shelf_id)
        .bind(position_on_shelf)
        .bind(media_id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Take an item off its shelf. Returns false when the item does not
    /// exist.
    pub async fn unshelve(pool: &SqlitePool, media_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE physical_media SET
                shelf_id = NULL,
                position_on_shelf = NULL,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $1
            "#,
        )
        .bind(media_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a physical media item by ID
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM physical_media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for occupant dimension queries
#[derive(Debug, sqlx::FromRow)]
struct CaseDimensionsRow {
    width: String,
    height: String,
    depth: String,
}

impl CaseDimensionsRow {
    fn decode(self) -> Result<Dimension, sqlx::Error> {
        decode_dimension(&self.width, &self.height, &self.depth)
    }
}
