use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    AppState, auth,
    error::{AppError, AppResult},
    models::{LoginRequest, Movie, MovieDraft},
};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Movie Catalog API</h1>")
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<String>> {
    let token = state.tokens.issue(&req.email, &req.password)?;
    Ok(Json(token))
}

#[derive(Debug, Deserialize)]
pub struct MovieFilter {
    pub category: Option<String>,
    pub year: Option<i32>,
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(filter): Query<MovieFilter>,
) -> AppResult<Json<Vec<Movie>>> {
    state.tokens.verify(auth::bearer_token(&headers)?)?;

    let movies = match &filter.category {
        Some(category) => state.store.filter_by_category(category).await?,
        None => state.store.list().await?,
    };

    let movies = match filter.year {
        Some(year) => movies.into_iter().filter(|m| m.year == year).collect(),
        None => movies,
    };

    Ok(Json(movies))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<Movie>> {
    let movie = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no movie with id {id}")))?;
    Ok(Json(movie))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<MovieDraft>,
) -> AppResult<impl IntoResponse> {
    let draft = draft.validated()?;
    let movie = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(json!({ "message": "movie created", "movie": movie }))))
}

pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(draft): Json<MovieDraft>,
) -> AppResult<Json<serde_json::Value>> {
    let draft = draft.validated()?;
    state
        .store
        .update(id, draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("no movie with id {id}")))?;
    Ok(Json(json!({ "message": "movie updated" })))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Json<serde_json::Value>> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("no movie with id {id}")));
    }
    Ok(Json(json!({ "message": "movie deleted" })))
}
