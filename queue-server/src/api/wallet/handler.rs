//! Coin wallet API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::User;
use validator::Validate;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;

#[derive(Debug, Deserialize, Validate)]
pub struct TopUpRequest {
    #[validate(range(min = 1, message = "top-up amount must be positive"))]
    pub amount: i64,
}

/// GET /api/wallet/:user_id - user profile with coin balance
pub async fn get_wallet(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.queue.get_user(&user_id)?;
    Ok(Json(ApiResponse::success(user)))
}

/// POST /api/wallet/:user_id/topup - add coins to the wallet
pub async fn top_up(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
    Json(payload): Json<TopUpRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state.queue.credit_coins(&user_id, payload.amount)?;
    Ok(Json(ApiResponse::success(user)))
}
