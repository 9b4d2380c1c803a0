//! Coin wallet API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{user_id}/wallet", get(handler::get_wallet))
        .route("/{user_id}/wallet/topup", post(handler::top_up))
}
