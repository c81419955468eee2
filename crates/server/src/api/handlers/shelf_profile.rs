use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{CreateShelfProfile, Dimension, Paginated, Pagination, ShelfProfile};
use crate::repositories::ShelfProfileRepository;
use crate::state::AppState;

/// Create a new shelf profile
#[utoipa::path(
    post,
    path = "/api/shelf_profiles",
    tag = "shelf_profile",
    request_body = CreateShelfProfile,
    responses(
        (status = 201, description = "Shelf profile created", body = ShelfProfile),
        (status = 400, description = "Invalid measurements"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_shelf_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateShelfProfile>,
) -> AppResult<(StatusCode, Json<ShelfProfile>)> {
    let dimension = Dimension::new(payload.width, payload.height, payload.depth)
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let profile = ShelfProfileRepository::create(&state.db, dimension).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// List shelf profiles
#[utoipa::path(
    get,
    path = "/api/shelf_profiles",
    tag = "shelf_profile",
    params(Pagination),
    responses(
        (status = 200, description = "Page of shelf profiles", body = inline(Paginated<ShelfProfile>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_shelf_profiles(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<ShelfProfile>>> {
    let items = ShelfProfileRepository::list(&state.db, pagination).await?;
    let count = ShelfProfileRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a shelf profile by ID
#[utoipa::path(
    get,
    path = "/api/shelf_profiles/{id}",
    tag = "shelf_profile",
    params(("id" = i64, Path, description = "Shelf profile ID")),
    responses(
        (status = 200, description = "The shelf profile", body = ShelfProfile),
        (status = 404, description = "Shelf profile not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_shelf_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ShelfProfile>> {
    let profile = ShelfProfileRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Shelf profile not found"))?;
    Ok(Json(profile))
}

/// Delete a shelf profile. Rejected while any shelf still uses it.
#[utoipa::path(
    delete,
    path = "/api/shelf_profiles/{id}",
    tag = "shelf_profile",
    params(("id" = i64, Path, description = "Shelf profile ID")),
    responses(
        (status = 204, description = "Shelf profile deleted"),
        (status = 404, description = "Shelf profile not found"),
        (status = 409, description = "Shelf profile is still referenced by a shelf"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_shelf_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = ShelfProfileRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Shelf profile not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
