use axum::{Json, Router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    Router::new()
        // Bookcase endpoints
        .route(
            "/api/bookcases",
            post(handlers::create_bookcase).get(handlers::list_bookcases),
        )
        .route(
            "/api/bookcases/{id}",
            get(handlers::get_bookcase).delete(handlers::delete_bookcase),
        )
        .route(
            "/api/bookcases/{id}/shelves",
            get(handlers::get_bookcase_shelves),
        )
        // Shelf profile endpoints
        .route(
            "/api/shelf_profiles",
            post(handlers::create_shelf_profile).get(handlers::list_shelf_profiles),
        )
        .route(
            "/api/shelf_profiles/{id}",
            get(handlers::get_shelf_profile).delete(handlers::delete_shelf_profile),
        )
        // Media case profile endpoints
        .route(
            "/api/case_profiles",
            post(handlers::create_case_profile).get(handlers::list_case_profiles),
        )
        .route(
            "/api/case_profiles/{id}",
            get(handlers::get_case_profile).delete(handlers::delete_case_profile),
        )
        // Shelf endpoints
        .route(
            "/api/shelves",
            post(handlers::create_shelf).get(handlers::list_shelves),
        )
        .route(
            "/api/shelves/{id}",
            get(handlers::get_shelf).delete(handlers::delete_shelf),
        )
        .route(
            "/api/shelves/{id}/dimensions",
            get(handlers::get_shelf_dimensions),
        )
        .route("/api/shelves/{id}/media", get(handlers::get_shelf_media))
        .route(
            "/api/shelves/{id}/capacity",
            get(handlers::get_shelf_capacity),
        )
        .route(
            "/api/shelves/{id}/fit/{media_id}",
            get(handlers::get_shelf_fit),
        )
        // Movie endpoints
        .route(
            "/api/movies",
            post(handlers::create_movie).get(handlers::list_movies),
        )
        .route(
            "/api/movies/{id}",
            get(handlers::get_movie).delete(handlers::delete_movie),
        )
        .route(
            "/api/movies/{id}/physical_media",
            get(handlers::get_movie_physical_media),
        )
        // Physical media endpoints
        .route(
            "/api/physical_media",
            post(handlers::create_physical_media).get(handlers::list_physical_media),
        )
        .route(
            "/api/physical_media/{id}",
            get(handlers::get_physical_media).delete(handlers::delete_physical_media),
        )
        .route(
            "/api/physical_media/{id}/dimensions",
            get(handlers::get_physical_media_dimensions),
        )
        .route(
            "/api/physical_media/{id}/shelf",
            put(handlers::assign_physical_media).delete(handlers::unshelve_physical_media),
        )
        // Collection endpoints
        .route(
            "/api/collections",
            post(handlers::create_collection).get(handlers::list_collections),
        )
        .route(
            "/api/collections/{id}",
            get(handlers::get_collection).delete(handlers::delete_collection),
        )
        .route(
            "/api/collections/{id}/media",
            get(handlers::get_collection_media),
        )
        .route(
            "/api/collections/{id}/movies",
            get(handlers::get_collection_movies),
        )
        // OpenAPI document
        .route("/api/openapi.json", get(openapi_json))
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;

    Json(ApiDoc::openapi())
}
