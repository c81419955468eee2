use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{CreateMediaCaseProfile, Dimension, MediaCaseProfile, Paginated, Pagination};
use crate::repositories::MediaCaseProfileRepository;
use crate::state::AppState;

/// Create a new media case profile
#[utoipa::path(
    post,
    path = "/api/case_profiles",
    tag = "case_profile",
    request_body = CreateMediaCaseProfile,
    responses(
        (status = 201, description = "Media case profile created", body = MediaCaseProfile),
        (status = 400, description = "Invalid measurements"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_case_profile(
    State(state): State<AppState>,
    Json(payload): Json<CreateMediaCaseProfile>,
) -> AppResult<(StatusCode, Json<MediaCaseProfile>)> {
    let dimension = Dimension::new(payload.width, payload.height, payload.depth)
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let profile = MediaCaseProfileRepository::create(
        &state.db,
        payload.format,
        &payload.description,
        dimension,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// List media case profiles
#[utoipa::path(
    get,
    path = "/api/case_profiles",
    tag = "case_profile",
    params(Pagination),
    responses(
        (status = 200, description = "Page of media case profiles", body = inline(Paginated<MediaCaseProfile>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_case_profiles(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<MediaCaseProfile>>> {
    let items = MediaCaseProfileRepository::list(&state.db, pagination).await?;
    let count = MediaCaseProfileRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a media case profile by ID
#[utoipa::path(
    get,
    path = "/api/case_profiles/{id}",
    tag = "case_profile",
    params(("id" = i64, Path, description = "Media case profile ID")),
    responses(
        (status = 200, description = "The media case profile", body = MediaCaseProfile),
        (status = 404, description = "Media case profile not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_case_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MediaCaseProfile>> {
    let profile = MediaCaseProfileRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Media case profile not found"))?;
    Ok(Json(profile))
}

/// Delete a media case profile. Rejected while any physical media still
/// uses it; case measurements are canonical per-format data, not per-item
/// data.
#[utoipa::path(
    delete,
    path = "/api/case_profiles/{id}",
    tag = "case_profile",
    params(("id" = i64, Path, description = "Media case profile ID")),
    responses(
        (status = 204, description = "Media case profile deleted"),
        (status = 404, description = "Media case profile not found"),
        (status = 409, description = "Media case profile is still referenced"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_case_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = MediaCaseProfileRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Media case profile not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
