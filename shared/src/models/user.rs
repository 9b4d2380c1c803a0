//! User Model

use serde::{Deserialize, Serialize};

/// User entity with coin wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user ID (String)
    pub id: String,
    pub name: String,
    /// Avatar reference (URL or emoji)
    pub avatar: String,
    /// Virtual-currency balance, never negative.
    /// Mutated only through the ledger debit/credit operations.
    pub coins: i64,
    /// Registration time (UTC millis)
    pub member_since: i64,
    /// Menu item IDs the user marked as favorites
    pub favorite_items: Vec<String>,
    pub total_orders: u32,
}
