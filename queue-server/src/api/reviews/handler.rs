//! Reviews API handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::models::Review;
use validator::Validate;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::community::NewReview;
use crate::core::ServerState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1))]
    pub order_id: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub user_name: String,
    #[validate(range(min = 1, max = 5, message = "rating must be between 1 and 5"))]
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub menu_items: Vec<String>,
}

/// GET /api/reviews - reviews, newest first
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<Review>>> {
    Json(ApiResponse::success(state.feed.list_reviews()))
}

/// POST /api/reviews - review a past order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<ApiResponse<Review>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // the review belongs to a real order
    state.queue.get_order(&payload.order_id)?;

    let review = state.feed.create_review(NewReview {
        order_id: payload.order_id,
        user_id: payload.user_id,
        user_name: payload.user_name,
        rating: payload.rating,
        comment: payload.comment,
        menu_items: payload.menu_items,
    })?;
    Ok(Json(ApiResponse::success(review)))
}
