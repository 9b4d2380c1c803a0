//! Server state - shared handles for all request handlers

use std::sync::Arc;

use shared::models::{MenuItem, SalesData};

use crate::community::FeedStore;
use crate::core::Config;
use crate::orders::QueueManager;
use crate::seed;

/// Shared server state
///
/// Holds the owned stores behind `Arc` so handlers get cheap clones.
/// There are no global singletons: everything reachable from a request
/// goes through this struct.
///
/// | Field | Description |
/// |-------|-------------|
/// | config | Immutable runtime configuration |
/// | queue | Orders + users + queue counter (single-writer core) |
/// | feed | Community posts and reviews |
/// | menu | Read-only menu catalog |
/// | sales_history | Seeded daily sales rollups (pre-launch history) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub queue: Arc<QueueManager>,
    pub feed: Arc<FeedStore>,
    pub menu: Arc<Vec<MenuItem>>,
    pub sales_history: Arc<Vec<SalesData>>,
}

impl ServerState {
    /// Build the full server state, optionally loading demo data
    ///
    /// The menu catalog is always loaded; demo users, orders, posts,
    /// reviews and sales history are gated by `config.seed_demo_data`.
    pub fn initialize(config: &Config) -> Self {
        let menu = seed::menu_items();
        let queue = QueueManager::new();
        let feed = FeedStore::new();

        let sales_history = if config.seed_demo_data {
            seed::load_demo_data(&queue, &feed, &menu);
            seed::sales_history()
        } else {
            Vec::new()
        };

        tracing::info!(
            menu_items = menu.len(),
            seeded = config.seed_demo_data,
            "Server state initialized"
        );

        Self {
            config: config.clone(),
            queue: Arc::new(queue),
            feed: Arc::new(feed),
            menu: Arc::new(menu),
            sales_history: Arc::new(sales_history),
        }
    }
}
