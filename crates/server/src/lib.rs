pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod state;

use std::net::SocketAddr;

pub use api::router::create_router;
pub use config::Config;
pub use db::create_pool;
pub use state::AppState;

pub async fn run_server(
    addr: SocketAddr,
    database_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::new(database_url.to_string());
    let pool = create_pool(&config.database_url, config.max_connections).await?;
    seed::seed_case_profiles(&pool).await?;
    let state = AppState::new(pool, config);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
