//! Community feed API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::CommunityPost;
use validator::Validate;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::community::{NewComment, NewPost};
use crate::core::ServerState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub user_name: String,
    pub user_avatar: String,
    pub image: String,
    #[validate(length(min = 1, max = 500, message = "caption must be 1-500 characters"))]
    pub caption: String,
    pub menu_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub user_name: String,
    #[validate(length(min = 1, max = 500, message = "comment must be 1-500 characters"))]
    pub text: String,
}

/// GET /api/posts - feed, newest first
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<CommunityPost>>> {
    Json(ApiResponse::success(state.feed.list_posts()))
}

/// GET /api/posts/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CommunityPost>>> {
    let post = state.feed.get_post(&id)?;
    Ok(Json(ApiResponse::success(post)))
}

/// POST /api/posts - publish a food photo post
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreatePostRequest>,
) -> AppResult<Json<ApiResponse<CommunityPost>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state.feed.create_post(NewPost {
        user_id: payload.user_id,
        user_name: payload.user_name,
        user_avatar: payload.user_avatar,
        image: payload.image,
        caption: payload.caption,
        menu_type: payload.menu_type,
    })?;
    Ok(Json(ApiResponse::success(post)))
}

/// POST /api/posts/:id/like
pub async fn like(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<CommunityPost>>> {
    let post = state.feed.like_post(&id)?;
    Ok(Json(ApiResponse::success(post)))
}

/// POST /api/posts/:id/comments
pub async fn add_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<Json<ApiResponse<CommunityPost>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let post = state.feed.add_comment(
        &id,
        NewComment {
            user_id: payload.user_id,
            user_name: payload.user_name,
            text: payload.text,
        },
    )?;
    Ok(Json(ApiResponse::success(post)))
}
