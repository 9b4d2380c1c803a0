//! Order Model

use serde::{Deserialize, Serialize};

use super::menu_item::MenuItem;

/// Order status
///
/// Strictly forward-moving: `pending → cooking → ready → completed`.
/// The first three statuses form the "active" set that participates in
/// queue numbering; `completed` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Cooking,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Position in the forward-only lifecycle (0-based)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Cooking => 1,
            Self::Ready => 2,
            Self::Completed => 3,
        }
    }

    /// Whether the order participates in queue numbering
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Cooking | Self::Ready)
    }

    /// Whether the order may pay to skip the queue
    ///
    /// `ready` orders are already plated and cannot move; only
    /// `pending` and `cooking` orders are eligible.
    pub fn is_skippable(&self) -> bool {
        matches!(self, Self::Pending | Self::Cooking)
    }

    /// Whether a transition to `next` respects the forward-only rule
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        next.rank() >= self.rank()
    }
}

/// How the order was built
///
/// Informational tag only; both paths produce identical orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Built through the cooking-game flow
    Game,
    /// Built by browsing the menu manually
    Lazy,
}

/// Order line item
///
/// `menu_item` is an immutable snapshot taken at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item: MenuItem,
    /// Quantity, always >= 1
    pub quantity: u32,
    pub customizations: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Opaque unique ID, assigned at creation
    pub id: String,
    /// Position in the active queue (1-based, contiguous among active
    /// orders). Frozen at its last value once the order completes.
    pub queue_number: u32,
    pub items: Vec<OrderItem>,
    /// Sum of item subtotals at creation time; stored, never recomputed
    pub total_price: f64,
    pub status: OrderStatus,
    /// Creation time (UTC millis)
    pub timestamp: i64,
    pub table_number: Option<u32>,
    pub user_id: Option<String>,
    pub order_type: OrderType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rank_ordering() {
        assert!(OrderStatus::Pending.rank() < OrderStatus::Cooking.rank());
        assert!(OrderStatus::Cooking.rank() < OrderStatus::Ready.rank());
        assert!(OrderStatus::Ready.rank() < OrderStatus::Completed.rank());
    }

    #[test]
    fn test_active_set() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Cooking.is_active());
        assert!(OrderStatus::Ready.is_active());
        assert!(!OrderStatus::Completed.is_active());
    }

    #[test]
    fn test_skippable_excludes_ready() {
        assert!(OrderStatus::Pending.is_skippable());
        assert!(OrderStatus::Cooking.is_skippable());
        assert!(!OrderStatus::Ready.is_skippable());
        assert!(!OrderStatus::Completed.is_skippable());
    }

    #[test]
    fn test_forward_only_transitions() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cooking));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Cooking.can_transition_to(OrderStatus::Cooking));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Cooking));
    }

    #[test]
    fn test_status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Cooking).unwrap(),
            "\"cooking\""
        );
        let status: OrderStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, OrderStatus::Ready);
    }
}
