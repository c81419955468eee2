use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{Bookcase, CreateBookcase, Paginated, Pagination, Shelf};
use crate::repositories::{BookcaseRepository, ShelfRepository};
use crate::state::AppState;

/// Create a new bookcase
#[utoipa::path(
    post,
    path = "/api/bookcases",
    tag = "bookcase",
    request_body = CreateBookcase,
    responses(
        (status = 201, description = "Bookcase created", body = Bookcase),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_bookcase(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookcase>,
) -> AppResult<(StatusCode, Json<Bookcase>)> {
    let bookcase = BookcaseRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(bookcase)))
}

/// List bookcases
#[utoipa::path(
    get,
    path = "/api/bookcases",
    tag = "bookcase",
    params(Pagination),
    responses(
        (status = 200, description = "Page of bookcases", body = inline(Paginated<Bookcase>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_bookcases(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<Bookcase>>> {
    let items = BookcaseRepository::list(&state.db, pagination).await?;
    let count = BookcaseRepository::count(&state.db).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a bookcase by ID
#[utoipa::path(
    get,
    path = "/api/bookcases/{id}",
    tag = "bookcase",
    params(("id" = i64, Path, description = "Bookcase ID")),
    responses(
        (status = 200, description = "The bookcase", body = Bookcase),
        (status = 404, description = "Bookcase not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_bookcase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Bookcase>> {
    let bookcase = BookcaseRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Bookcase not found"))?;
    Ok(Json(bookcase))
}

/// Get the shelves of a bookcase, top to bottom
#[utoipa::path(
    get,
    path = "/api/bookcases/{id}/shelves",
    tag = "bookcase",
    params(("id" = i64, Path, description = "Bookcase ID")),
    responses(
        (status = 200, description = "Shelves of the bookcase", body = Vec<Shelf>),
        (status = 404, description = "Bookcase not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_bookcase_shelves(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Shelf>>> {
    BookcaseRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Bookcase not found"))?;

    let shelves = ShelfRepository::list_by_bookcase(&state.db, id).await?;
    Ok(Json(shelves))
}

/// Delete a bookcase and its shelves
#[utoipa::path(
    delete,
    path = "/api/bookcases/{id}",
    tag = "bookcase",
    params(("id" = i64, Path, description = "Bookcase ID")),
    responses(
        (status = 204, description = "Bookcase deleted"),
        (status = 404, description = "Bookcase not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_bookcase(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = BookcaseRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Bookcase not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
