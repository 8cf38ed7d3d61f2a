//! Tutorial CRUD handlers: list, read, create, update, delete, delete all, list published.

use crate::error::AppError;
use crate::model::{ListQuery, Tutorial, TutorialInput};
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn log_found(rows: &[Tutorial]) {
    if rows.is_empty() {
        tracing::info!("no tutorials found");
    } else {
        tracing::info!(count = rows.len(), "found tutorials");
    }
}

/// Fixed reply used to check that the API is up.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Tutorial",
    responses((status = 200, description = "API is working", body = String, content_type = "text/plain"))
)]
pub async fn test() -> &'static str {
    "Test endpoint response"
}

#[utoipa::path(
    get,
    path = "/tutorials",
    tag = "Tutorial",
    params(("title" = Option<String>, Query, description = "Case-insensitive substring of the title")),
    responses(
        (status = 200, description = "Matching tutorials", body = Vec<Tutorial>),
        (status = 204, description = "No tutorial matched"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = state.tutorials.list(query.title.as_deref()).await?;
    log_found(&rows);
    Ok(success_many(rows))
}

#[utoipa::path(
    get,
    path = "/tutorials/{id}",
    tag = "Tutorial",
    params(("id" = i64, Path, description = "Tutorial id")),
    responses(
        (status = 200, description = "Found", body = Tutorial),
        (status = 404, description = "Not found")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.tutorials.get(id).await?;
    Ok(success_one_ok(row))
}

#[utoipa::path(
    post,
    path = "/tutorials",
    tag = "Tutorial",
    request_body = TutorialInput,
    responses(
        (status = 201, description = "Created", body = Tutorial),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<TutorialInput>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.tutorials.create(body).await?;
    Ok(success_one(row))
}

#[utoipa::path(
    put,
    path = "/tutorials/{id}",
    tag = "Tutorial",
    params(("id" = i64, Path, description = "Tutorial id")),
    request_body = TutorialInput,
    responses(
        (status = 200, description = "Updated", body = Tutorial),
        (status = 404, description = "Not found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<TutorialInput>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.tutorials.update(id, body).await?;
    Ok(success_one_ok(row))
}

#[utoipa::path(
    delete,
    path = "/tutorials/{id}",
    tag = "Tutorial",
    params(("id" = i64, Path, description = "Tutorial id")),
    responses(
        (status = 204, description = "Deleted, or there was nothing to delete"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.tutorials.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/tutorials",
    tag = "Tutorial",
    responses(
        (status = 204, description = "All tutorials deleted"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.tutorials.delete_all().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/tutorials/published",
    tag = "Tutorial",
    responses(
        (status = 200, description = "Published tutorials", body = Vec<Tutorial>),
        (status = 204, description = "Nothing published"),
        (status = 500, description = "Persistence failure")
    )
)]
pub async fn list_published(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.tutorials.list_published().await?;
    log_found(&rows);
    Ok(success_many(rows))
}
