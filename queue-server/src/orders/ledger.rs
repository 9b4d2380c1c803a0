//! Coin ledger primitives
//!
//! Balances live on `User.coins` and only move through these two
//! functions, always inside the queue manager's write lock.

use shared::models::User;

/// Attempt to deduct `amount` coins from the user's balance.
///
/// Returns `true` and applies the deduction when the balance covers
/// the full amount; returns `false` and leaves the balance untouched
/// otherwise. Never drives a balance negative.
pub fn debit(user: &mut User, amount: i64) -> bool {
    if amount < 0 {
        return false;
    }
    if user.coins < amount {
        return false;
    }
    user.coins -= amount;
    true
}

/// Add `amount` coins to the user's balance.
///
/// Negative amounts are ignored; credits are not a back door for
/// deductions.
pub fn credit(user: &mut User, amount: i64) {
    if amount < 0 {
        return;
    }
    user.coins += amount;
}
