mod bookcase;
mod collection;
mod media_case_profile;
mod movie;
mod physical_media;
mod shelf;
mod shelf_profile;

pub use bookcase::BookcaseRepository;
pub use collection::CollectionRepository;
pub use media_case_profile::MediaCaseProfileRepository;
pub use movie::MovieRepository;
pub use physical_media::PhysicalMediaRepository;
pub use shelf::ShelfRepository;
pub use shelf_profile::ShelfProfileRepository;

use rust_decimal::Decimal;

use crate::models::Dimension;

/// Decode one canonical decimal-text column into an exact `Decimal`.
pub(crate) fn decode_mm(column: &'static str, raw: &str) -> Result<Decimal, sqlx::Error> {
    raw.parse()
        .map_err(|e: rust_decimal::Error| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
}

/// Decode the three stored measurement columns into a `Dimension`.
pub(crate) fn decode_dimension(
    width: &str,
    height: &str,
    depth: &str,
) -> Result<Dimension, sqlx::Error> {
    let width = decode_mm("width", width)?;
    let height = decode_mm("height", height)?;
    let depth = decode_mm("depth", depth)?;

    Dimension::new(width, height, depth).map_err(|e| sqlx::Error::ColumnDecode {
        index: "dimension".to_string(),
        source: Box::new(e),
    })
}
