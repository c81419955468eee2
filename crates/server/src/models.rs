mod bookcase;
mod collection;
mod dimension;
mod media_case_profile;
mod movie;
mod pagination;
mod physical_media;
pub mod shelf;
mod shelf_profile;

pub use bookcase::{Bookcase, CreateBookcase};
pub use collection::{Collection, CreateCollection};
pub use dimension::{Axis, Dimension, DimensionError, MAX_MM};
pub use media_case_profile::{
    CreateMediaCaseProfile, MediaCaseProfile, MediaFormat, ParseMediaFormatError,
};
pub use movie::{
    validate_release_year, CreateMovie, Movie, MovieFilter, ReleaseYearError, MAX_RELEASE_YEAR,
    MIN_RELEASE_YEAR,
};
pub use pagination::{Paginated, Pagination};
pub use physical_media::{
    AssignShelf, CreatePhysicalMedia, PhysicalMedia, PhysicalMediaWithMovies,
};
pub use shelf::{CreateShelf, FitCheck, Orientation, Shelf, ShelfCapacity};
pub use shelf_profile::{CreateShelfProfile, ShelfProfile};
