//! Health check handler

use axum::{Json, extract::State};
use serde::Serialize;

use crate::api::ApiResponse;
use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthInfo {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub active_orders: usize,
}

/// GET /health - liveness and a quick queue snapshot
pub async fn health(State(state): State<ServerState>) -> Json<ApiResponse<HealthInfo>> {
    Json(ApiResponse::success(HealthInfo {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.config.environment.clone(),
        active_orders: state.queue.list_active().len(),
    }))
}
