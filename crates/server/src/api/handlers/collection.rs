use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    Collection, CreateCollection, Movie, Paginated, Pagination, PhysicalMedia,
};
use crate::repositories::{CollectionRepository, PhysicalMediaRepository};
use crate::state::AppState;

/// Create a new collection
#[utoipa::path(
    post,
    path = "/api/collections",
    tag = "collection",
    request_body = CreateCollection,
    responses(
        (status = 201, description = "Collection created", body = Collection),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    let collection = CollectionRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(collection)))
}

/// List collections
#[utoipa::path(
    get,
    path = "/api/collections",
    tag = "collection",
    params(Pagination),
    responses(
        (status = 200, description = "Page of collections", body = inline(Paginated<Collection>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_collections(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<Collection>>> {
    let items = CollectionRepository::list(&state.db, pagination).await?;
    let count = CollectionRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a collection by ID
#[utoipa::path(
    get,
    path = "/api/collections/{id}",
    tag = "collection",
    params(("id" = i64, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "The collection", body = Collection),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Collection>> {
    let collection = CollectionRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Collection not found"))?;
    Ok(Json(collection))
}

/// Get the physical media belonging to a collection
#[utoipa::path(
    get,
    path = "/api/collections/{id}/media",
    tag = "collection",
    params(("id" = i64, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Media in the collection", body = Vec<PhysicalMedia>),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_collection_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<PhysicalMedia>>> {
    CollectionRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Collection not found"))?;

    let media = PhysicalMediaRepository::list_by_collection(&state.db, id).await?;
    Ok(Json(media))
}

/// Get the distinct movies reachable through a collection's media.
/// A movie carried by two items in the collection appears once.
#[utoipa::path(
    get,
    path = "/api/collections/{id}/movies",
    tag = "collection",
    params(("id" = i64, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Distinct movies in the collection", body = Vec<Movie>),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_collection_movies(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Movie>>> {
    CollectionRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Collection not found"))?;

    let movies = CollectionRepository::movies(&state.db, id).await?;
    Ok(Json(movies))
}

/// Delete a collection; its media stay, unassigned
#[utoipa::path(
    delete,
    path = "/api/collections/{id}",
    tag = "collection",
    params(("id" = i64, Path, description = "Collection ID")),
    responses(
        (status = 204, description = "Collection deleted"),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = CollectionRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Collection not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
