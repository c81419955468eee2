use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    CreateShelf, FitCheck, Paginated, Pagination, PhysicalMedia, Shelf, ShelfCapacity,
    ShelfProfile,
};
use crate::repositories::{PhysicalMediaRepository, ShelfProfileRepository, ShelfRepository};
use crate::state::AppState;

/// Create a new shelf
#[utoipa::path(
    post,
    path = "/api/shelves",
    tag = "shelf",
    request_body = CreateShelf,
    responses(
        (status = 201, description = "Shelf created", body = Shelf),
        (status = 409, description = "Position already taken in this bookcase"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_shelf(
    State(state): State<AppState>,
    Json(payload): Json<CreateShelf>,
) -> AppResult<(StatusCode, Json<Shelf>)> {
    let shelf = ShelfRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(shelf)))
}

/// List shelves
#[utoipa::path(
    get,
    path = "/api/shelves",
    tag = "shelf",
    params(Pagination),
    responses(
        (status = 200, description = "Page of shelves", body = inline(Paginated<Shelf>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_shelves(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<Shelf>>> {
    let items = ShelfRepository::list(&state.db, pagination).await?;
    let count = ShelfRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a shelf by ID
#[utoipa::path(
    get,
    path = "/api/shelves/{id}",
    tag = "shelf",
    params(("id" = i64, Path, description = "Shelf ID")),
    responses(
        (status = 200, description = "The shelf", body = Shelf),
        (status = 404, description = "Shelf not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Shelf>> {
    let shelf = ShelfRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shelf not found"))?;
    Ok(Json(shelf))
}

/// Get the profile (physical envelope) of a shelf
#[utoipa::path(
    get,
    path = "/api/shelves/{id}/dimensions",
    tag = "shelf",
    params(("id" = i64, Path, description = "Shelf ID")),
    responses(
        (status = 200, description = "Profile of the shelf", body = ShelfProfile),
        (status = 404, description = "Shelf not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf_dimensions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShelfProfile>> {
    let shelf = ShelfRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shelf not found"))?;

    let profile = ShelfProfileRepository::get_by_id(&state.db, shelf.shelf_profile_id)
        .await?
        .ok_or_else(|| AppError::not_found("Shelf profile not found"))?;
    Ok(Json(profile))
}

/// Get the physical media currently on a shelf
#[utoipa::path(
    get,
    path = "/api/shelves/{id}/media",
    tag = "shelf",
    params(("id" = i64, Path, description = "Shelf ID")),
    responses(
        (status = 200, description = "Media on the shelf", body = Vec<PhysicalMedia>),
        (status = 404, description = "Shelf not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<PhysicalMedia>>> {
    ShelfRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shelf not found"))?;

    let media = PhysicalMediaRepository::list_by_shelf(&state.db, id).await?;
    Ok(Json(media))
}

/// Get the space accounting summary of a shelf
#[utoipa::path(
    get,
    path = "/api/shelves/{id}/capacity",
    tag = "shelf",
    params(("id" = i64, Path, description = "Shelf ID")),
    responses(
        (status = 200, description = "Used and available space", body = ShelfCapacity),
        (status = 404, description = "Shelf not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf_capacity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShelfCapacity>> {
    let capacity = state.capacity.capacity(id).await?;
    Ok(Json(capacity))
}

/// Check whether a shelf can take a physical media item
#[utoipa::path(
    get,
    path = "/api/shelves/{id}/fit/{media_id}",
    tag = "shelf",
    params(
        ("id" = i64, Path, description = "Shelf ID"),
        ("media_id" = i64, Path, description = "Physical media ID")
    ),
    responses(
        (status = 200, description = "Fit and capacity verdict", body = FitCheck),
        (status = 404, description = "Shelf or physical media not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf_fit(
    State(state): State<AppState>,
    Path((id, media_id)): Path<(i64, i64)>,
) -> AppResult<Json<FitCheck>> {
    let fit = state.capacity.fit_check(id, media_id).await?;
    Ok(Json(fit))
}

/// Delete a shelf; media on it become unshelved
#[utoipa::path(
    delete,
    path = "/api/shelves/{id}",
    tag = "shelf",
    params(("id" = i64, Path, description = "Shelf ID")),
    responses(
        (status = 204, description = "Shelf deleted"),
        (status = 404, description = "Shelf not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_shelf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = ShelfRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Shelf not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
