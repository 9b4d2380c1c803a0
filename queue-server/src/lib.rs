//! Table Queue Server - in-memory restaurant ordering core
//!
//! Single-process service backing a QR table-ordering experience:
//! order creation, the forward-only status lifecycle, contiguous queue
//! numbering, and the coin-paid skip-queue operation, plus the
//! read-mostly satellites (menu catalog, community feed, reviews,
//! sales rollups).
//!
//! # Module structure
//!
//! ```text
//! queue-server/src/
//! ├── core/          # Config, ServerState, Server runner
//! ├── orders/        # Queue/ledger core (the interesting part)
//! ├── community/     # Posts and reviews store
//! ├── api/           # HTTP routes and handlers
//! ├── seed.rs        # Demo data loader
//! └── utils/         # Logger, error re-exports
//! ```
//!
//! All state lives in memory behind single-writer locks; there is no
//! persistence and no authentication.

pub mod api;
pub mod community;
pub mod core;
pub mod orders;
pub mod seed;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use orders::{QueueError, QueueManager, QueueResult};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// One-time process setup: dotenv and the logging subscriber.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let json_format = std::env::var("ENVIRONMENT")
        .map(|e| e == "production")
        .unwrap_or(false);
    let log_dir = std::env::var("LOG_DIR").ok();

    init_logger_with_file(&level, json_format, log_dir.as_deref())?;
    Ok(())
}
