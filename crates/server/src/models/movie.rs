use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

/// First year of commercial cinema.
pub const MIN_RELEASE_YEAR: i32 = 1888;
/// Upper bound to keep typos out of the catalog.
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// Error when a release year falls outside the historical range of cinema.
#[derive(Debug, Clone, Error)]
#[error("Release year must be between 1888 and 2100, got {0}")]
pub struct ReleaseYearError(i32);

/// Validate a release year.
///
/// # Errors
///
/// Returns `ReleaseYearError` if the year is outside 1888..=2100.
pub fn validate_release_year(year: i32) -> Result<i32, ReleaseYearError> {
    if (MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(ReleaseYearError(year))
    }
}

/// A movie in the catalog. Identity is the (title, release year, external
/// reference) triple, so same-titled films from different years coexist.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,

    pub title: String,
    pub release_year: i32,
    /// Link to an external movie database entry; unique when present
    pub external_url: Option<String>,
    pub watched: bool,
}

/// Request body for creating a new movie
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMovie {
    pub title: String,
    /// Release year, 1888 to 2100 inclusive
    pub release_year: i32,
    /// Link to an external movie database entry
    pub external_url: Option<String>,
    #[serde(default)]
    pub watched: bool,
}

/// Filter query parameters for movie listings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct MovieFilter {
    /// Case-insensitive title substring
    pub title: Option<String>,
    pub release_year: Option<i32>,
    pub watched: Option<bool>,
}
