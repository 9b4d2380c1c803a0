//! Order queue API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use shared::models::{MenuItem, Order, OrderStatus, OrderType, User};
use validator::Validate;

use crate::api::{ApiResponse, AppError, AppResult};
use crate::core::ServerState;
use crate::orders::{CreateOrderInput, NewOrderItem};

#[derive(Debug, Deserialize, Serialize)]
pub struct OrderItemRequest {
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub customizations: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "order must contain at least one item"))]
    pub items: Vec<OrderItemRequest>,
    pub table_number: Option<u32>,
    pub user_id: Option<String>,
    pub order_type: OrderType,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: OrderStatus,
}

/// Which client flow requested the skip; they are priced differently
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipFlow {
    Game,
    #[default]
    Queue,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SkipQueueRequest {
    #[validate(range(min = 1, message = "must skip at least one queue position"))]
    pub queues_to_skip: u32,
    #[serde(default)]
    pub flow: SkipFlow,
}

#[derive(Debug, Serialize)]
pub struct SkipQueueResponse {
    pub order: Order,
    pub user: User,
}

/// GET /api/orders - all orders, including completed
pub async fn list(State(state): State<ServerState>) -> Json<ApiResponse<Vec<Order>>> {
    Json(ApiResponse::success(state.queue.list_all()))
}

/// GET /api/orders/active - queued orders in priority order
pub async fn list_active(State(state): State<ServerState>) -> Json<ApiResponse<Vec<Order>>> {
    Json(ApiResponse::success(state.queue.list_active()))
}

/// GET /api/orders/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.queue.get_order(&id)?;
    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/orders - create an order at the tail of the queue
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let input = CreateOrderInput {
        items: payload
            .items
            .into_iter()
            .map(|i| NewOrderItem {
                menu_item: i.menu_item,
                quantity: i.quantity,
                customizations: i.customizations,
            })
            .collect(),
        table_number: payload.table_number,
        user_id: payload.user_id,
        order_type: payload.order_type,
    };

    let order = state.queue.create_order(input)?;
    Ok(Json(ApiResponse::success(order)))
}

/// PUT /api/orders/:id/status - forward-only status transition
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.queue.set_status(&id, payload.status)?;
    Ok(Json(ApiResponse::success(order)))
}

/// POST /api/orders/:id/skip - pay coins to move up the queue
pub async fn skip_queue(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SkipQueueRequest>,
) -> AppResult<Json<ApiResponse<SkipQueueResponse>>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let unit_cost = match payload.flow {
        SkipFlow::Game => state.config.game_skip_cost,
        SkipFlow::Queue => state.config.queue_skip_cost,
    };

    let outcome = state
        .queue
        .skip_queue(&id, payload.queues_to_skip, unit_cost)?;
    Ok(Json(ApiResponse::success(SkipQueueResponse {
        order: outcome.order,
        user: outcome.user,
    })))
}
