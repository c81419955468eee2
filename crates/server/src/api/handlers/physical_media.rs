use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    AssignShelf, CreatePhysicalMedia, MediaCaseProfile, Paginated, Pagination, PhysicalMedia,
    PhysicalMediaWithMovies,
};
use crate::repositories::{MediaCaseProfileRepository, PhysicalMediaRepository};
use crate::state::AppState;

/// Create a new physical media item
#[utoipa::path(
    post,
    path = "/api/physical_media",
    tag = "physical_media",
    request_body = CreatePhysicalMedia,
    responses(
        (status = 201, description = "Physical media created", body = PhysicalMediaWithMovies),
        (status = 409, description = "Referenced row missing or position taken"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_physical_media(
    State(state): State<AppState>,
    Json(payload): Json<CreatePhysicalMedia>,
) -> AppResult<(StatusCode, Json<PhysicalMediaWithMovies>)> {
    let media = PhysicalMediaRepository::create(&state.db, payload).await?;
    let movies = PhysicalMediaRepository::movies(&state.db, media.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(PhysicalMediaWithMovies { media, movies }),
    ))
}

/// List physical media items
#[utoipa::path(
    get,
    path = "/api/physical_media",
    tag = "physical_media",
    params(Pagination),
    responses(
        (status = 200, description = "Page of physical media", body = inline(Paginated<PhysicalMedia>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_physical_media(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<PhysicalMedia>>> {
    let items = PhysicalMediaRepository::list(&state.db, pagination).await?;
    let count = PhysicalMediaRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a physical media item with its movies
#[utoipa::path(
    get,
    path = "/api/physical_media/{id}",
    tag = "physical_media",
    params(("id" = i64, Path, description = "Physical media ID")),
    responses(
        (status = 200, description = "The physical media item", body = PhysicalMediaWithMovies),
        (status = 404, description = "Physical media not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_physical_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PhysicalMediaWithMovies>> {
    let media = PhysicalMediaRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Physical media not found"))?;

    let movies = PhysicalMediaRepository::movies(&state.db, id).await?;
    Ok(Json(PhysicalMediaWithMovies { media, movies }))
}

/// Get the case profile of a physical media item
#[utoipa::path(
    get,
    path = "/api/physical_media/{id}/dimensions",
    tag = "physical_media",
    params(("id" = i64, Path, description = "Physical media ID")),
    responses(
        (status = 200, description = "Case profile of the item", body = MediaCaseProfile),
        (status = 404, description = "Physical media not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_physical_media_dimensions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MediaCaseProfile>> {
    let profile = MediaCaseProfileRepository::get_for_media(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Physical media not found"))?;
    Ok(Json(profile))
}

/// Place a physical media item on a shelf.
///
/// The item is admitted with the combined physical-fit and capacity check
/// before the placement is written; both run in one transaction.
#[utoipa::path(
    put,
    path = "/api/physical_media/{id}/shelf",
    tag = "physical_media",
    params(("id" = i64, Path, description = "Physical media ID")),
    request_body = AssignShelf,
    responses(
        (status = 200, description = "Item placed on the shelf", body = PhysicalMedia),
        (status = 404, description = "Physical media or shelf not found"),
        (status = 409, description = "Shelf cannot accommodate the item or position is taken"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn assign_physical_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssignShelf>,
) -> AppResult<Json<PhysicalMedia>> {
    let media = state
        .capacity
        .assign(id, payload.shelf_id, payload.position_on_shelf)
        .await?;
    Ok(Json(media))
}

/// Take a physical media item off its shelf
#[utoipa::path(
    delete,
    path = "/api/physical_media/{id}/shelf",
    tag = "physical_media",
    params(("id" = i64, Path, description = "Physical media ID")),
    responses(
        (status = 200, description = "Item unshelved", body = PhysicalMedia),
        (status = 404, description = "Physical media not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn unshelve_physical_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PhysicalMedia>> {
    let unshelved = PhysicalMediaRepository::unshelve(&state.db, id).await?;
    if !unshelved {
        return Err(AppError::not_found("Physical media not found"));
    }

    let media = PhysicalMediaRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Physical media not found"))?;
    Ok(Json(media))
}

/// Delete a physical media item
#[utoipa::path(
    delete,
    path = "/api/physical_media/{id}",
    tag = "physical_media",
    params(("id" = i64, Path, description = "Physical media ID")),
    responses(
        (status = 204, description = "Physical media deleted"),
        (status = 404, description = "Physical media not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_physical_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = PhysicalMediaRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Physical media not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
