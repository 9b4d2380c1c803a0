//! QueueManager test suite
//!
//! Shared helpers live here; scenario tests are split by concern:
//! - `test_core`: creation, status transitions, renumbering
//! - `test_skip`: skip-ahead success and every rejection path
//! - `test_flows`: multi-step end-to-end flows

mod test_skip;

use super::*;
use shared::models::MenuCategory;

pub fn manager() -> QueueManager {
    QueueManager::new()
}

pub fn user(id: &str, coins: i64) -> User {
    User {
        id: id.to_string(),
        name: format!("User {}", id),
        avatar: "🦀".to_string(),
        coins,
        member_since: 1_700_000_000_000,
        favorite_items: vec![],
        total_orders: 0,
    }
}

pub fn menu_item(name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: format!("menu-{}", name),
        name: name.to_string(),
        price,
        image: "🍜".to_string(),
        description: format!("{} description", name),
        category: MenuCategory::Main,
        spicy_level: 0,
        is_available: true,
    }
}

pub fn order_input(user_id: Option<&str>) -> CreateOrderInput {
    CreateOrderInput {
        items: vec![NewOrderItem {
            menu_item: menu_item("Noodles", 12.0),
            quantity: 1,
            customizations: None,
        }],
        table_number: Some(7),
        user_id: user_id.map(str::to_string),
        order_type: OrderType::Lazy,
    }
}

/// Create an order for `user_id`, panicking on failure
pub fn place_order(mgr: &QueueManager, user_id: Option<&str>) -> Order {
    mgr.create_order(order_input(user_id)).unwrap()
}

/// Queue numbers of active orders, in priority order
pub fn active_numbers(mgr: &QueueManager) -> Vec<u32> {
    mgr.list_active().iter().map(|o| o.queue_number).collect()
}

/// Active order ids, in priority order
pub fn active_ids(mgr: &QueueManager) -> Vec<String> {
    mgr.list_active().iter().map(|o| o.id.clone()).collect()
}

/// Assert the standing invariants: active queue numbers are exactly
/// 1..=N in order, and the counter is N + 1.
pub fn assert_queue_invariants(mgr: &QueueManager) {
    let numbers = active_numbers(mgr);
    let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
    assert_eq!(numbers, expected, "active queue numbers must be contiguous");
    assert_eq!(
        mgr.next_queue_number(),
        numbers.len() as u32 + 1,
        "counter must be active count + 1"
    );
}
