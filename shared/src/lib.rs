//! Shared types for the table-queue ordering system
//!
//! Domain models, error taxonomy and the unified API response envelope
//! used by the queue-server crate.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
