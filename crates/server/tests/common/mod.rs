#![allow(dead_code)]

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use server::db::create_pool;
use server::models::{
    Bookcase, CreateBookcase, CreateMovie, CreatePhysicalMedia, CreateShelf, Dimension,
    MediaCaseProfile, MediaFormat, Movie, Orientation, ShelfProfile,
};
use server::repositories::{
    BookcaseRepository, MediaCaseProfileRepository, MovieRepository, ShelfProfileRepository,
};

/// One connection, so the whole test shares a single in-memory database.
pub async fn test_pool() -> SqlitePool {
    create_pool("sqlite::memory:", 1)
        .await
        .expect("create in-memory pool")
}

pub fn dimension(width: Decimal, height: Decimal, depth: Decimal) -> Dimension {
    Dimension::new(width, height, depth).expect("valid dimension")
}

pub async fn make_bookcase(pool: &SqlitePool, name: &str) -> Bookcase {
    BookcaseRepository::create(
        pool,
        CreateBookcase {
            name: name.to_string(),
            description: String::new(),
            location: String::new(),
        },
    )
    .await
    .expect("create bookcase")
}

pub async fn make_shelf_profile(
    pool: &SqlitePool,
    width: Decimal,
    height: Decimal,
    depth: Decimal,
) -> ShelfProfile {
    ShelfProfileRepository::create(pool, dimension(width, height, depth))
        .await
        .expect("create shelf profile")
}

pub async fn make_case_profile(
    pool: &SqlitePool,
    width: Decimal,
    height: Decimal,
    depth: Decimal,
) -> MediaCaseProfile {
    MediaCaseProfileRepository::create(
        pool,
        MediaFormat::BluRay,
        "Test case",
        dimension(width, height, depth),
    )
    .await
    .expect("create media case profile")
}

pub async fn make_movie(pool: &SqlitePool, title: &str, release_year: i32) -> Movie {
    MovieRepository::create(
        pool,
        CreateMovie {
            title: title.to_string(),
            release_year,
            external_url: None,
            watched: false,
        },
    )
    .await
    .expect("create movie")
}

/// Minimal shelf payload; tests tweak fields with struct update syntax.
pub fn shelf_input(bookcase_id: i64, position_from_top: i32, shelf_profile_id: i64) -> CreateShelf {
    CreateShelf {
        bookcase_id,
        position_from_top,
        shelf_profile_id,
        orientation: Orientation::Vertical,
    }
}

/// Minimal physical media payload; tests tweak fields with struct update
/// syntax.
pub fn media_input(case_profile_id: i64) -> CreatePhysicalMedia {
    CreatePhysicalMedia {
        movie_ids: vec![],
        shelf_id: None,
        position_on_shelf: None,
        case_profile_id,
        collection_id: None,
        notes: String::new(),
    }
}

pub fn assert_unique_violation(err: &sqlx::Error) {
    match err {
        sqlx::Error::Database(db) => assert!(
            matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation),
            "expected unique violation, got {db:?}"
        ),
        other => panic!("expected database error, got {other:?}"),
    }
}

pub fn assert_foreign_key_violation(err: &sqlx::Error) {
    match err {
        sqlx::Error::Database(db) => assert!(
            matches!(db.kind(), sqlx::error::ErrorKind::ForeignKeyViolation),
            "expected foreign key violation, got {db:?}"
        ),
        other => panic!("expected database error, got {other:?}"),
    }
}

pub fn assert_check_violation(err: &sqlx::Error) {
    match err {
        sqlx::Error::Database(db) => assert!(
            matches!(db.kind(), sqlx::error::ErrorKind::CheckViolation),
            "expected check violation, got {db:?}"
        ),
        other => panic!("expected database error, got {other:?}"),
    }
}
