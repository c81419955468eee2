use chrono::{DateTime, Utc};
use sqlx::{Executor, Sqlite, SqlitePool};

use super::decode_dimension;
use crate::models::{Dimension, MediaCaseProfile, MediaFormat, Pagination};

/// Common SELECT fields for media case profile queries
const SELECT_CASE_PROFILE: &str = r#"
    SELECT
        id, created_at, updated_at,
        media_format, description,
        width, height, depth
    FROM media_case_profile
"#;

pub struct MediaCaseProfileRepository;

impl MediaCaseProfileRepository {
    /// Create a new media case profile
    pub async fn create(
        pool: &SqlitePool,
        format: MediaFormat,
        description: &str,
        dimension: Dimension,
    ) -> Result<MediaCaseProfile, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO media_case_profile (media_format, description, width, height, depth)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(format.as_str())
        .bind(description)
        .bind(dimension.width().to_string())
        .bind(dimension.height().to_string())
        .bind(dimension.depth().to_string())
        .fetch_one(pool)
        .await?;

        Self::get_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Get a media case profile by ID
    pub async fn get_by_id(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<MediaCaseProfile>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_CASE_PROFILE);
        let row = sqlx::query_as::<_, CaseProfileRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Get the case profile of a physical media item
    pub async fn get_for_media(
        pool: &SqlitePool,
        media_id: i64,
    ) -> Result<Option<MediaCaseProfile>, sqlx::Error> {
        Self::get_for_media_with_executor(pool, media_id).await
    }

    /// Get the case profile of a physical media item using a generic
    /// executor (supports transactions)
    pub async fn get_for_media_with_executor<'e, E>(
        executor: E,
        media_id: i64,
    ) -> Result<Option<MediaCaseProfile>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, CaseProfileRow>(
            r#"
            SELECT
                p.id, p.created_at, p.updated_at,
                p.media_format, p.description,
                p.width, p.height, p.depth
            FROM media_case_profile p
            JOIN physical_media pm ON pm.case_profile_id = p.id
            WHERE pm.id = $1
            "#,
        )
        .bind(media_id)
        .fetch_optional(executor)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List media case profiles
    pub async fn list(
        pool: &SqlitePool,
        pagination: Pagination,
    ) -> Result<Vec<MediaCaseProfile>, sqlx::Error> {
        let query = format!("{} ORDER BY id ASC LIMIT $1 OFFSET $2", SELECT_CASE_PROFILE);
        let rows = sqlx::query_as::<_, CaseProfileRow>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Count all media case profiles
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM media_case_profile")
            .fetch_one(pool)
            .await
    }

    /// Delete a media case profile by ID. Fails with a foreign key violation
    /// while any physical media still references it.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media_case_profile WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct CaseProfileRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    media_format: String,
    description: String,
    width: String,
    height: String,
    depth: String,
}

impl TryFrom<CaseProfileRow> for MediaCaseProfile {
    type Error = sqlx::Error;

    fn try_from(row: CaseProfileRow) -> Result<Self, Self::Error> {
        let format: MediaFormat =
            row.media_format
                .parse()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "media_format".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            format,
            description: row.description,
            dimension: decode_dimension(&row.width, &row.height, &row.depth)?,
        })
    }
}
