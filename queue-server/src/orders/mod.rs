//! Order queue core
//!
//! The one module in this repository with real invariants:
//!
//! - **manager**: `QueueManager`, the single mutation entry point for
//!   orders, the queue counter and user wallets
//! - **renumber**: the contiguous queue renumbering pass
//! - **ledger**: coin debit/credit primitives
//! - **money**: decimal arithmetic for order totals
//!
//! # Invariants
//!
//! After every mutation, the queue numbers of all active orders
//! (`pending`/`cooking`/`ready`) are exactly `{1..=N}` in priority
//! order, completed orders keep their last number frozen, and the
//! next-queue counter equals `N + 1`. Coin balances never go negative,
//! and a failed skip leaves every field untouched.

pub mod ledger;
pub mod manager;
pub mod money;
pub mod renumber;

// Re-exports
pub use manager::{CreateOrderInput, NewOrderItem, QueueError, QueueManager, QueueResult};
pub use renumber::renumber_active;

// Re-export shared types for convenience
pub use shared::models::{Order, OrderItem, OrderStatus, OrderType};
