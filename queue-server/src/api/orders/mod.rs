//! Order queue API module

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/active", get(handler::list_active))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", put(handler::set_status))
        .route("/{id}/skip", post(handler::skip_queue))
}
