mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use server::{create_router, AppState, Config};

async fn test_app() -> Router {
    let pool = common::test_pool().await;
    let state = AppState::new(pool, Config::new("sqlite::memory:".to_string()));
    create_router(state)
}

async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON body")
    };

    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None).await
}

/// Create the fixture chain bookcase -> shelf profile -> shelf and return
/// (bookcase_id, shelf_id).
async fn make_shelf(app: &Router, width: &str, height: &str, depth: &str) -> (i64, i64) {
    let (status, bookcase) = post(app, "/api/bookcases", json!({ "name": "Test bookcase" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, profile) = post(
        app,
        "/api/shelf_profiles",
        json!({ "width": width, "height": height, "depth": depth }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, shelf) = post(
        app,
        "/api/shelves",
        json!({
            "bookcase_id": bookcase["id"],
            "position_from_top": 1,
            "shelf_profile_id": profile["id"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (
        bookcase["id"].as_i64().expect("bookcase id"),
        shelf["id"].as_i64().expect("shelf id"),
    )
}

/// Create a case profile and one physical media using it, returning
/// (case_profile_id, media_id).
async fn make_media(app: &Router, width: &str, height: &str, depth: &str) -> (i64, i64) {
    let (status, profile) = post(
        app,
        "/api/case_profiles",
        json!({
            "format": "bluray",
            "description": "Test case",
            "width": width,
            "height": height,
            "depth": depth,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, media) = post(
        app,
        "/api/physical_media",
        json!({ "case_profile_id": profile["id"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    (
        profile["id"].as_i64().expect("profile id"),
        media["media"]["id"].as_i64().expect("media id"),
    )
}

#[tokio::test]
async fn create_and_fetch_bookcase() {
    let app = test_app().await;

    let (status, created) = post(
        &app,
        "/api/bookcases",
        json!({ "name": "Living room", "location": "by the window" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Living room");
    assert_eq!(created["location"], "by the window");
    assert_eq!(created["description"], "");

    let id = created["id"].as_i64().expect("id");
    let (status, fetched) = get(&app, &format!("/api/bookcases/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Living room");

    let (status, page) = get(&app, "/api/bookcases").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 1);
    assert_eq!(page["items"][0]["id"], created["id"]);
}

#[tokio::test]
async fn missing_rows_return_404() {
    let app = test_app().await;

    for uri in [
        "/api/bookcases/42",
        "/api/shelves/42",
        "/api/movies/42",
        "/api/physical_media/42",
        "/api/collections/42",
        "/api/shelves/42/capacity",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
        assert!(body["error"].is_string(), "GET {uri} error body");
    }
}

#[tokio::test]
async fn duplicate_shelf_position_conflicts() {
    let app = test_app().await;
    let (bookcase_id, _shelf_id) = make_shelf(&app, "150.00", "150.00", "20.00").await;

    let (status, profile) = post(
        &app,
        "/api/shelf_profiles",
        json!({ "width": "100.00", "height": "100.00", "depth": "20.00" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        "/api/shelves",
        json!({
            "bookcase_id": bookcase_id,
            "position_from_top": 1,
            "shelf_profile_id": profile["id"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn invalid_measurements_are_bad_requests() {
    let app = test_app().await;

    let (status, body) = post(
        &app,
        "/api/shelf_profiles",
        json!({ "width": "-1.00", "height": "150.00", "depth": "20.00" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("negative"));

    let (status, _) = post(
        &app,
        "/api/case_profiles",
        json!({
            "format": "dvd",
            "description": "Oversized",
            "width": "1000.00",
            "height": "184.00",
            "depth": "14.00",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn movie_validation_and_identity() {
    let app = test_app().await;

    let (status, movie) = post(
        &app,
        "/api/movies",
        json!({ "title": "Stalker", "release_year": 1979 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(movie["watched"], false);

    let (status, body) = post(
        &app,
        "/api/movies",
        json!({ "title": "Too Early", "release_year": 1887 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("1888"));

    let (status, _) = post(
        &app,
        "/api/movies",
        json!({ "title": "Stalker", "release_year": 1979 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn movie_filters_and_pagination() {
    let app = test_app().await;

    for (title, year, watched) in [
        ("Alien", 1979, true),
        ("Aliens", 1986, false),
        ("Blade Runner", 1982, false),
    ] {
        let (status, _) = post(
            &app,
            "/api/movies",
            json!({ "title": title, "release_year": year, "watched": watched }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, page) = get(&app, "/api/movies?title=Alien").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 2);

    let (status, page) = get(&app, "/api/movies?watched=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 2);

    let (status, page) = get(&app, "/api/movies?release_year=1982").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 1);
    assert_eq!(page["items"][0]["title"], "Blade Runner");

    // Title-ordered: Alien, Aliens, Blade Runner.
    let (status, page) = get(&app, "/api/movies?limit=1&offset=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 3);
    assert_eq!(page["items"].as_array().expect("items").len(), 1);
    assert_eq!(page["items"][0]["title"], "Aliens");
}

#[tokio::test]
async fn physical_media_embeds_its_movies() {
    let app = test_app().await;

    let (status, movie1) = post(
        &app,
        "/api/movies",
        json!({ "title": "Videodrome", "release_year": 1983 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, movie2) = post(
        &app,
        "/api/movies",
        json!({ "title": "The Fly", "release_year": 1986 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, profile) = post(
        &app,
        "/api/case_profiles",
        json!({
            "format": "dvd",
            "description": "DVD (Standard)",
            "width": "130.00",
            "height": "184.00",
            "depth": "14.00",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["dimension"]["width"], "130.00");

    let (status, media) = post(
        &app,
        "/api/physical_media",
        json!({
            "case_profile_id": profile["id"],
            "movie_ids": [movie1["id"], movie2["id"]],
            "notes": "double feature",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(media["media"]["notes"], "double feature");

    let id = media["media"]["id"].as_i64().expect("media id");
    let (status, fetched) = get(&app, &format!("/api/physical_media/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = fetched["movies"]
        .as_array()
        .expect("movies")
        .iter()
        .map(|m| m["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["The Fly", "Videodrome"]);

    let (status, dimensions) = get(&app, &format!("/api/physical_media/{id}/dimensions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dimensions["dimension"]["height"], "184.00");
}

#[tokio::test]
async fn shelf_capacity_and_assignment_flow() {
    let app = test_app().await;
    let (_bookcase_id, shelf_id) = make_shelf(&app, "150.00", "150.00", "20.00").await;
    let (_case_id, media_id) = make_media(&app, "128.50", "148.00", "12.00").await;

    // Empty shelf: nothing used, everything available.
    let (status, capacity) = get(&app, &format!("/api/shelves/{shelf_id}/capacity")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(capacity["stacking_axis"], "height");
    assert_eq!(capacity["used_space"], "0");
    assert_eq!(capacity["available_space"], "150.00");

    let (status, fit) = get(&app, &format!("/api/shelves/{shelf_id}/fit/{media_id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fit["can_fit"], true);
    assert_eq!(fit["can_accommodate"], true);

    let (status, placed) = request(
        &app,
        Method::PUT,
        &format!("/api/physical_media/{media_id}/shelf"),
        Some(json!({ "shelf_id": shelf_id, "position_on_shelf": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(placed["shelf_id"], shelf_id);
    assert_eq!(placed["position_on_shelf"], 1);

    let (status, capacity) = get(&app, &format!("/api/shelves/{shelf_id}/capacity")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(capacity["used_space"], "148.00");
    assert_eq!(capacity["available_space"], "2.00");

    // A second identical case physically fits but no longer has room.
    let (_, second_media_id) = make_media(&app, "128.50", "148.00", "12.00").await;
    let (status, fit) = get(
        &app,
        &format!("/api/shelves/{shelf_id}/fit/{second_media_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fit["can_fit"], true);
    assert_eq!(fit["can_accommodate"], false);

    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/physical_media/{second_media_id}/shelf"),
        Some(json!({ "shelf_id": shelf_id, "position_on_shelf": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("not enough space"));

    // Unshelving frees the space again.
    let (status, unshelved) = request(
        &app,
        Method::DELETE,
        &format!("/api/physical_media/{media_id}/shelf"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(unshelved["shelf_id"].is_null());

    let (status, capacity) = get(&app, &format!("/api/shelves/{shelf_id}/capacity")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(capacity["available_space"], "150.00");
}

#[tokio::test]
async fn shelf_media_listing_and_dimensions() {
    let app = test_app().await;
    let (_bookcase_id, shelf_id) = make_shelf(&app, "150.00", "500.00", "20.00").await;
    let (_case_id, media_id) = make_media(&app, "128.50", "148.00", "12.00").await;

    let (status, _) = request(
        &app,
        Method::PUT,
        &format!("/api/physical_media/{media_id}/shelf"),
        Some(json!({ "shelf_id": shelf_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, media) = get(&app, &format!("/api/shelves/{shelf_id}/media")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(media.as_array().expect("media").len(), 1);
    assert_eq!(media[0]["id"], media_id);

    let (status, dimensions) = get(&app, &format!("/api/shelves/{shelf_id}/dimensions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dimensions["dimension"]["height"], "500.00");
}

#[tokio::test]
async fn referenced_case_profile_delete_conflicts() {
    let app = test_app().await;
    let (case_id, media_id) = make_media(&app, "128.50", "148.00", "12.00").await;

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/case_profiles/{case_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/physical_media/{media_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/case_profiles/{case_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn collection_reports_distinct_movies() {
    let app = test_app().await;

    let (status, collection) = post(
        &app,
        "/api/collections",
        json!({ "name": "Cronenberg box" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let collection_id = collection["id"].as_i64().expect("collection id");

    let mut movie_ids = Vec::new();
    for n in 1..=5 {
        let (status, movie) = post(
            &app,
            "/api/movies",
            json!({ "title": format!("Movie {n}"), "release_year": 1980 + n }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        movie_ids.push(movie["id"].as_i64().expect("movie id"));
    }

    let (status, profile) = post(
        &app,
        "/api/case_profiles",
        json!({
            "format": "bluray",
            "description": "Test case",
            "width": "128.50",
            "height": "148.00",
            "depth": "12.00",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Movie 3 appears on both discs.
    for ids in [&movie_ids[0..3], &movie_ids[2..5]] {
        let (status, _) = post(
            &app,
            "/api/physical_media",
            json!({
                "case_profile_id": profile["id"],
                "movie_ids": ids,
                "collection_id": collection_id,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, media) = get(&app, &format!("/api/collections/{collection_id}/media")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(media.as_array().expect("media").len(), 2);

    let (status, movies) = get(&app, &format!("/api/collections/{collection_id}/movies")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = movies
        .as_array()
        .expect("movies")
        .iter()
        .map(|m| m["title"].as_str().expect("title"))
        .collect();
    assert_eq!(
        titles,
        vec!["Movie 1", "Movie 2", "Movie 3", "Movie 4", "Movie 5"]
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;

    let (status, document) = get(&app, "/api/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(document["info"]["title"], "Mediashelf API");
    assert!(document["paths"]["/api/shelves/{id}/capacity"].is_object());
}
