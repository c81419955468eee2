use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{AppError, AppResult};
use crate::models::{
    validate_release_year, CreateMovie, Movie, MovieFilter, Paginated, Pagination, PhysicalMedia,
};
use crate::repositories::{MovieRepository, PhysicalMediaRepository};
use crate::state::AppState;

/// Create a new movie
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "movie",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, description = "Invalid release year"),
        (status = 409, description = "A movie with this identity already exists"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    validate_release_year(payload.release_year)
        .map_err(|e| AppError::bad_request(e.to_string()))?;

    let movie = MovieRepository::create(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// List movies, optionally filtered by title substring, release year and
/// watched flag
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "movie",
    params(MovieFilter, Pagination),
    responses(
        (status = 200, description = "Page of movies", body = inline(Paginated<Movie>)),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filter): Query<MovieFilter>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<Paginated<Movie>>> {
    let items = MovieRepository::list(&state.db, &filter, pagination).await?;
    let count = MovieRepository::count(&state.db, &filter).await?;
    Ok(Json(Paginated { items, count }))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/api/movies/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;
    Ok(Json(movie))
}

/// Get the physical media carrying a movie
#[utoipa::path(
    get,
    path = "/api/movies/{id}/physical_media",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Physical media carrying the movie", body = Vec<PhysicalMedia>),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_movie_physical_media(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<PhysicalMedia>>> {
    MovieRepository::get_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie not found"))?;

    let media = PhysicalMediaRepository::list_by_movie(&state.db, id).await?;
    Ok(Json(media))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/movies/{id}",
    tag = "movie",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = MovieRepository::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::not_found("Movie not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
