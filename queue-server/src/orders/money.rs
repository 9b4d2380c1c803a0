//! Money calculation utilities using rust_decimal for precision
//!
//! Order totals are computed once at creation time with `Decimal`
//! arithmetic, rounded to 2 decimal places, then stored as `f64`.

use rust_decimal::prelude::*;

use super::manager::{NewOrderItem, QueueError};

/// Rounding strategy for monetary values (2 decimal places)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
const MAX_QUANTITY: u32 = 9999;

/// Convert an f64 price to Decimal
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Convert a Decimal back to f64 for storage/serialization
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Validate one order line item before snapshotting it
pub fn validate_item(item: &NewOrderItem) -> Result<(), QueueError> {
    let price = item.menu_item.price;
    if !price.is_finite() {
        return Err(QueueError::Validation(format!(
            "price must be a finite number, got {}",
            price
        )));
    }
    if price < 0.0 {
        return Err(QueueError::Validation(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(QueueError::Validation(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }
    if item.quantity == 0 {
        return Err(QueueError::Validation(
            "quantity must be at least 1".to_string(),
        ));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(QueueError::Validation(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }
    Ok(())
}

/// Compute the order total from item snapshots
///
/// `price × quantity` per line, summed with decimal precision and
/// rounded half-up to cents.
pub fn order_total(items: &[NewOrderItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| to_decimal(item.menu_item.price) * Decimal::from(item.quantity))
        .sum();
    to_f64(total.round_dp(DECIMAL_PLACES))
}
