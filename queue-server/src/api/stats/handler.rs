//! Sales statistics API handlers

use axum::{Json, extract::State};
use chrono::Utc;
use shared::models::{OrderStatus, SalesData};

use crate::api::ApiResponse;
use crate::core::ServerState;

/// GET /api/stats/sales - daily rollups, seeded history plus a live
/// entry for today computed from completed orders
pub async fn sales(State(state): State<ServerState>) -> Json<ApiResponse<Vec<SalesData>>> {
    let mut history = state.sales_history.as_ref().clone();

    let completed: Vec<_> = state
        .queue
        .list_all()
        .into_iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .collect();

    if !completed.is_empty() {
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let revenue: f64 = completed.iter().map(|o| o.total_price).sum();
        history.push(SalesData {
            date: today,
            revenue,
            orders: completed.len() as u32,
        });
    }

    Json(ApiResponse::success(history))
}
