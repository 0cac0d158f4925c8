mod auth;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth::TokenIssuer,
    config::{Config, StoreBackend},
    store::{MemoryStore, MovieStore, SqliteStore},
};

pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub tokens: TokenIssuer,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/login", post(routes::login))
        .route("/movies", get(routes::list_movies).post(routes::create_movie))
        .route(
            "/movies/{id}",
            get(routes::get_movie).put(routes::update_movie).delete(routes::delete_movie),
        )
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,marquee=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn MovieStore> = match config.store_backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Sqlite => {
            let db = db::connect_and_migrate(&config.database_url).await?;
            Arc::new(SqliteStore::new(db))
        }
    };

    let tokens = TokenIssuer::new(
        &config.jwt_secret,
        config.admin_email.clone(),
        config.admin_password.clone(),
    );

    let state = Arc::new(AppState { store, tokens });

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, backend = ?config.store_backend, "listening");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
