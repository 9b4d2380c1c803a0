//! Menu catalog API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::ErrorCode;
use shared::models::MenuItem;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;

/// GET /api/menu - full catalog
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<MenuItem>>> {
    Json(ApiResponse::success(state.menu.as_ref().clone()))
}

/// GET /api/menu/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let item = state
        .menu
        .iter()
        .find(|m| m.id == id)
        .cloned()
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {} not found", id))
                .with_detail("item_id", id)
        })?;
    Ok(Json(ApiResponse::success(item)))
}
