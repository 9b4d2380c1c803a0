//! Queue manager
//!
//! `QueueManager` owns every order, user wallet and the queue counter
//! behind a single `RwLock`. All mutations go through it, so each one
//! observes and produces a consistent snapshot: contiguous queue
//! numbers on active orders, counter equal to the active count plus
//! one, and wallet balances that never go negative.

mod error;

#[cfg(test)]
mod tests;

pub use error::{QueueError, QueueResult};

use std::collections::HashMap;

use parking_lot::RwLock;
use shared::models::{MenuItem, Order, OrderItem, OrderStatus, OrderType, User};
use shared::util::{new_id, now_millis};

use super::{ledger, money, renumber::renumber_active};

/// One line item of a new order, snapshotted from the menu (or a
/// custom dish) at creation time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    pub customizations: Option<String>,
}

/// Input for [`QueueManager::create_order`]
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    pub items: Vec<NewOrderItem>,
    pub table_number: Option<u32>,
    pub user_id: Option<String>,
    pub order_type: OrderType,
}

/// Result of a successful skip: the repositioned order plus the
/// wallet it was charged against, both post-mutation snapshots.
#[derive(Debug, Clone)]
pub struct SkipOutcome {
    pub order: Order,
    pub user: User,
}

#[derive(Debug, Default)]
struct QueueState {
    orders: Vec<Order>,
    users: HashMap<String, User>,
    next_queue_number: u32,
}

/// Thread-safe order queue and wallet store
#[derive(Debug)]
pub struct QueueManager {
    state: RwLock<QueueState>,
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new()
    }
}

impl QueueManager {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(QueueState {
                orders: Vec::new(),
                users: HashMap::new(),
                next_queue_number: 1,
            }),
        }
    }

    // ==================== Users ====================

    /// Insert or replace a user record
    pub fn register_user(&self, user: User) {
        let mut state = self.state.write();
        state.users.insert(user.id.clone(), user);
    }

    pub fn get_user(&self, user_id: &str) -> QueueResult<User> {
        let state = self.state.read();
        state
            .users
            .get(user_id)
            .cloned()
            .ok_or_else(|| QueueError::UserNotFound(user_id.to_string()))
    }

    /// Add coins to a user's wallet (top-ups, rewards)
    pub fn credit_coins(&self, user_id: &str, amount: i64) -> QueueResult<User> {
        if amount <= 0 {
            return Err(QueueError::Validation(format!(
                "credit amount must be positive, got {}",
                amount
            )));
        }
        let mut state = self.state.write();
        let user = state
            .users
            .get_mut(user_id)
            .ok_or_else(|| QueueError::UserNotFound(user_id.to_string()))?;
        ledger::credit(user, amount);
        Ok(user.clone())
    }

    // ==================== Orders ====================

    /// Create a new order at the tail of the queue.
    ///
    /// The order enters as `pending` with the next queue number; item
    /// prices are snapshotted and totalled at this point.
    pub fn create_order(&self, input: CreateOrderInput) -> QueueResult<Order> {
        if input.items.is_empty() {
            return Err(QueueError::EmptyOrder);
        }
        for item in &input.items {
            money::validate_item(item)?;
        }

        let mut state = self.state.write();

        if let Some(user_id) = &input.user_id {
            if !state.users.contains_key(user_id) {
                return Err(QueueError::UserNotFound(user_id.clone()));
            }
        }

        let total_price = money::order_total(&input.items);
        let order = Order {
            id: new_id(),
            queue_number: state.next_queue_number,
            items: input
                .items
                .into_iter()
                .map(|i| OrderItem {
                    menu_item: i.menu_item,
                    quantity: i.quantity,
                    customizations: i.customizations,
                })
                .collect(),
            total_price,
            status: OrderStatus::Pending,
            timestamp: now_millis(),
            table_number: input.table_number,
            user_id: input.user_id,
            order_type: input.order_type,
        };

        state.orders.push(order.clone());
        state.next_queue_number += 1;

        if let Some(user_id) = &order.user_id {
            if let Some(user) = state.users.get_mut(user_id) {
                user.total_orders += 1;
            }
        }

        tracing::info!(
            order_id = %order.id,
            queue_number = order.queue_number,
            total = order.total_price,
            "Order created"
        );

        Ok(order)
    }

    /// Move an order to a new status.
    ///
    /// Transitions are forward-only along
    /// `pending -> cooking -> ready -> completed`; setting the current
    /// status again is a no-op. Completing an order frees its slot and
    /// the remaining active orders close ranks.
    pub fn set_status(&self, order_id: &str, status: OrderStatus) -> QueueResult<Order> {
        let mut state = self.state.write();

        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))?;

        if !order.status.can_transition_to(status) {
            return Err(QueueError::InvalidTransition {
                from: order.status,
                to: status,
            });
        }

        let left_queue = order.status.is_active() && !status.is_active();
        order.status = status;
        let order_id = order.id.clone();

        if left_queue {
            state.next_queue_number = renumber_active(&mut state.orders);
        }

        let order = state
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or_else(|| QueueError::OrderNotFound(order_id))?;

        tracing::info!(
            order_id = %order.id,
            status = ?order.status,
            "Order status updated"
        );

        Ok(order)
    }

    /// Move an order forward in the queue, paid in coins.
    ///
    /// The order jumps over `queues_to_skip` skippable orders
    /// (`pending`/`cooking`) ahead of it; `ready` orders never move.
    /// Cost is `queues_to_skip * unit_cost` coins, charged to the
    /// order's user. The operation is all-or-nothing: any failure
    /// leaves the queue and the wallet exactly as they were.
    pub fn skip_queue(
        &self,
        order_id: &str,
        queues_to_skip: u32,
        unit_cost: i64,
    ) -> QueueResult<SkipOutcome> {
        if queues_to_skip == 0 {
            return Err(QueueError::Validation(
                "must skip at least one queue position".to_string(),
            ));
        }

        let mut state = self.state.write();

        let order = state
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))?;

        if !order.status.is_skippable() {
            return Err(QueueError::NotSkippable(order.status));
        }
        let user_id = order
            .user_id
            .clone()
            .ok_or_else(|| QueueError::NoUser(order_id.to_string()))?;
        let balance = state
            .users
            .get(&user_id)
            .map(|u| u.coins)
            .ok_or_else(|| QueueError::UserNotFound(user_id.clone()))?;

        // Active orders in priority order; remember which slots hold
        // skippable orders, since ready orders keep their position.
        let mut active: Vec<(String, u32, bool)> = state
            .orders
            .iter()
            .filter(|o| o.status.is_active())
            .map(|o| (o.id.clone(), o.queue_number, o.status.is_skippable()))
            .collect();
        active.sort_by_key(|&(_, n, _)| n);

        let skippable: Vec<String> = active
            .iter()
            .filter(|&&(_, _, s)| s)
            .map(|(id, _, _)| id.clone())
            .collect();
        let position = skippable
            .iter()
            .position(|id| id == order_id)
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))?;

        let ahead = position as u32;
        if ahead < queues_to_skip {
            return Err(QueueError::InsufficientQueueDepth {
                requested: queues_to_skip,
                ahead,
            });
        }

        let required = i64::from(queues_to_skip) * unit_cost;
        if balance < required {
            return Err(QueueError::InsufficientCoins { required, balance });
        }

        // Past this point nothing can fail: charge, then reposition.
        if let Some(user) = state.users.get_mut(&user_id) {
            ledger::debit(user, required);
        }

        let mut permuted = skippable;
        permuted.remove(position);
        permuted.insert(position - queues_to_skip as usize, order_id.to_string());

        let mut new_numbers: HashMap<String, u32> = HashMap::new();
        let mut skippable_slots: Vec<u32> = Vec::new();
        for (slot, (id, _, is_skippable)) in active.iter().enumerate() {
            let number = slot as u32 + 1;
            if *is_skippable {
                skippable_slots.push(number);
            } else {
                new_numbers.insert(id.clone(), number);
            }
        }
        for (j, id) in permuted.iter().enumerate() {
            new_numbers.insert(id.clone(), skippable_slots[j]);
        }

        for order in state.orders.iter_mut() {
            if let Some(&number) = new_numbers.get(&order.id) {
                order.queue_number = number;
            }
        }
        state.next_queue_number = active.len() as u32 + 1;

        let order = state
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))?;
        let user = state
            .users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| QueueError::UserNotFound(user_id.clone()))?;

        tracing::info!(
            order_id = %order.id,
            queues_skipped = queues_to_skip,
            cost = required,
            new_queue_number = order.queue_number,
            "Order skipped ahead"
        );

        Ok(SkipOutcome { order, user })
    }

    // ==================== Queries ====================

    pub fn get_order(&self, order_id: &str) -> QueueResult<Order> {
        let state = self.state.read();
        state
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or_else(|| QueueError::OrderNotFound(order_id.to_string()))
    }

    /// All orders, in creation order
    pub fn list_all(&self) -> Vec<Order> {
        self.state.read().orders.clone()
    }

    /// Active orders (`pending`/`cooking`/`ready`), sorted by queue number
    pub fn list_active(&self) -> Vec<Order> {
        let state = self.state.read();
        let mut active: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.status.is_active())
            .cloned()
            .collect();
        active.sort_by_key(|o| o.queue_number);
        active
    }

    /// The queue number the next order will receive
    pub fn next_queue_number(&self) -> u32 {
        self.state.read().next_queue_number
    }
}
