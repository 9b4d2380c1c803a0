//! Queue renumbering pass
//!
//! Runs after every mutation that changes the set or ordering of
//! active orders, keeping queue numbers contiguous.

use shared::models::Order;

/// Reassign contiguous queue numbers to all active orders.
///
/// Active orders (`pending`/`cooking`/`ready`) are sorted by their
/// current queue number and renumbered `1..=N`; relative order is
/// preserved, gaps close up. Completed orders are never touched, they
/// keep whatever number they held when they left the queue.
///
/// Returns the next queue counter, always `N + 1`.
pub fn renumber_active(orders: &mut [Order]) -> u32 {
    let mut active: Vec<usize> = orders
        .iter()
        .enumerate()
        .filter(|(_, o)| o.status.is_active())
        .map(|(i, _)| i)
        .collect();

    // Stable sort: ties keep insertion order
    active.sort_by_key(|&i| orders[i].queue_number);

    for (position, &i) in active.iter().enumerate() {
        orders[i].queue_number = position as u32 + 1;
    }

    active.len() as u32 + 1
}
