use utoipa::OpenApi;

use crate::models::{
    AssignShelf, Axis, Bookcase, Collection, CreateBookcase, CreateCollection,
    CreateMediaCaseProfile, CreateMovie, CreatePhysicalMedia, CreateShelf, CreateShelfProfile,
    Dimension, FitCheck, MediaCaseProfile, MediaFormat, Movie, Orientation, PhysicalMedia,
    PhysicalMediaWithMovies, Shelf, ShelfCapacity, ShelfProfile,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediashelf API",
        version = "1.0.0"
    ),
    paths(
        crate::api::handlers::create_bookcase,
        crate::api::handlers::list_bookcases,
        crate::api::handlers::get_bookcase,
        crate::api::handlers::get_bookcase_shelves,
        crate::api::handlers::delete_bookcase,
        crate::api::handlers::create_shelf_profile,
        crate::api::handlers::list_shelf_profiles,
        crate::api::handlers::get_shelf_profile,
        crate::api::handlers::delete_shelf_profile,
        crate::api::handlers::create_case_profile,
        crate::api::handlers::list_case_profiles,
        crate::api::handlers::get_case_profile,
        crate::api::handlers::delete_case_profile,
        crate::api::handlers::create_shelf,
        crate::api::handlers::list_shelves,
        crate::api::handlers::get_shelf,
        crate::api::handlers::get_shelf_dimensions,
        crate::api::handlers::get_shelf_media,
        crate::api::handlers::get_shelf_capacity,
        crate::api::handlers::get_shelf_fit,
        crate::api::handlers::delete_shelf,
        crate::api::handlers::create_movie,
        crate::api::handlers::list_movies,
        crate::api::handlers::get_movie,
        crate::api::handlers::get_movie_physical_media,
        crate::api::handlers::delete_movie,
        crate::api::handlers::create_physical_media,
        crate::api::handlers::list_physical_media,
        crate::api::handlers::get_physical_media,
        crate::api::handlers::get_physical_media_dimensions,
        crate::api::handlers::assign_physical_media,
        crate::api::handlers::unshelve_physical_media,
        crate::api::handlers::delete_physical_media,
        crate::api::handlers::create_collection,
        crate::api::handlers::list_collections,
        crate::api::handlers::get_collection,
        crate::api::handlers::get_collection_media,
        crate::api::handlers::get_collection_movies,
        crate::api::handlers::delete_collection,
    ),
    tags(
        (name = "bookcase", description = "Bookcase endpoints"),
        (name = "shelf_profile", description = "Shelf profile endpoints"),
        (name = "case_profile", description = "Media case profile endpoints"),
        (name = "shelf", description = "Shelf and capacity endpoints"),
        (name = "movie", description = "Movie endpoints"),
        (name = "physical_media", description = "Physical media endpoints"),
        (name = "collection", description = "Collection endpoints")
    ),
    components(schemas(
        Axis,
        Orientation,
        MediaFormat,
        Dimension,
        Bookcase,
        CreateBookcase,
        ShelfProfile,
        CreateShelfProfile,
        MediaCaseProfile,
        CreateMediaCaseProfile,
        Shelf,
        CreateShelf,
        ShelfCapacity,
        FitCheck,
        Movie,
        CreateMovie,
        PhysicalMedia,
        PhysicalMediaWithMovies,
        CreatePhysicalMedia,
        AssignShelf,
        Collection,
        CreateCollection
    ))
)]
pub struct ApiDoc;
