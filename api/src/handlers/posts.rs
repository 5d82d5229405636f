use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use common::errors::AppError;
use common::models::{NewPost, Post};
use common::response::ApiResponse;

use crate::state::AppState;

/// Query parameters for bulk delete
#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub ids: Option<String>,
}

/// Get a single post by id
#[tracing::instrument(skip(state))]
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<ApiResponse<Post>, AppError> {
    let id: i32 = raw_id
        .parse()
        .map_err(|_| AppError::InvalidId(raw_id.clone()))?;

    let post = state.service.get_post(id).await?;
    Ok(ApiResponse::success("Post retrieved successfully", post))
}

/// List all posts
#[tracing::instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<Post>>, AppError> {
    let posts = state.service.get_all_posts().await?;
    Ok(ApiResponse::success("Posts retrieved successfully", posts))
}

/// Create a new post; the response echoes the post with its assigned id
#[tracing::instrument(skip(state, payload))]
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<NewPost>, JsonRejection>,
) -> Result<(StatusCode, ApiResponse<Post>), AppError> {
    let Json(new_post) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let post = state.service.create_post(new_post).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success("Post created successfully", post),
    ))
}

/// Bulk delete posts by a comma-separated id list
#[tracing::instrument(skip(state))]
pub async fn delete_posts(
    State(state): State<AppState>,
    Query(query): Query<DeleteQuery>,
) -> Result<StatusCode, AppError> {
    let raw = query
        .ids
        .filter(|ids| !ids.is_empty())
        .ok_or(AppError::MissingIds)?;

    let ids = parse_ids(&raw)?;
    state.service.delete_posts(&ids).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Parse a comma-separated id list, naming the first offending token on failure
fn parse_ids(raw: &str) -> Result<Vec<i32>, AppError> {
    raw.split(',')
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| AppError::InvalidId(token.to_string()))
        })
        .collect()
}
