//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`orders`] - order queue (create, status, skip)
//! - [`wallet`] - coin balance and top-ups
//! - [`menu`] - read-only menu catalog
//! - [`posts`] - community feed
//! - [`reviews`] - order reviews
//! - [`stats`] - sales rollups

pub mod health;
pub mod menu;
pub mod orders;
pub mod posts;
pub mod reviews;
pub mod stats;
pub mod wallet;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{ApiResponse, AppError, AppResult};

/// Assemble the full application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(wallet::router())
        .merge(menu::router())
        .merge(posts::router())
        .merge(reviews::router())
        .merge(stats::router())
}
