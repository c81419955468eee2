use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Schema statements, one per call (SQLite prepares a single statement at a
/// time). Delete behavior lives in the foreign key clauses: shelves die with
/// their bookcase, profiles are protected while referenced, and placed media
/// fall back to "unshelved" when their shelf or collection goes away.
const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bookcase (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        name TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        location TEXT NOT NULL DEFAULT ''
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shelf_profile (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        width TEXT NOT NULL,
        height TEXT NOT NULL,
        depth TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS media_case_profile (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        media_format TEXT NOT NULL,
        description TEXT NOT NULL,
        width TEXT NOT NULL,
        height TEXT NOT NULL,
        depth TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS shelf (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        bookcase_id INTEGER NOT NULL REFERENCES bookcase(id) ON DELETE CASCADE,
        shelf_profile_id INTEGER NOT NULL REFERENCES shelf_profile(id) ON DELETE RESTRICT,
        position_from_top INTEGER NOT NULL CHECK (position_from_top > 0),
        orientation TEXT NOT NULL DEFAULT 'vertical',
        UNIQUE (bookcase_id, position_from_top)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS movie (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        title TEXT NOT NULL,
        release_year INTEGER NOT NULL,
        external_url TEXT,
        watched BOOLEAN NOT NULL DEFAULT FALSE
    )
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_movie_identity
        ON movie (title, release_year, COALESCE(external_url, ''))
    "#,
    r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_movie_external_url
        ON movie (external_url) WHERE external_url IS NOT NULL
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS collection (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS physical_media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
        shelf_id INTEGER REFERENCES shelf(id) ON DELETE SET NULL,
        position_on_shelf INTEGER CHECK (position_on_shelf IS NULL OR position_on_shelf > 0),
        case_profile_id INTEGER NOT NULL REFERENCES media_case_profile(id) ON DELETE RESTRICT,
        collection_id INTEGER REFERENCES collection(id) ON DELETE SET NULL,
        notes TEXT NOT NULL DEFAULT '',
        UNIQUE (shelf_id, position_on_shelf)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS physical_media_movie (
        physical_media_id INTEGER NOT NULL REFERENCES physical_media(id) ON DELETE CASCADE,
        movie_id INTEGER NOT NULL REFERENCES movie(id) ON DELETE CASCADE,
        PRIMARY KEY (physical_media_id, movie_id)
    )
    "#,
];

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    for statement in MIGRATIONS {
        sqlx::query(statement).execute(&pool).await?;
    }

    Ok(pool)
}
