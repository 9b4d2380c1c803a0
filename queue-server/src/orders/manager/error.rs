//! Queue manager error type

use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use thiserror::Error;

/// Errors produced by [`QueueManager`](super::QueueManager) mutations.
///
/// Every variant maps onto an [`ErrorCode`] so handlers can bubble it
/// straight into the API response envelope.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueueError {
    #[error("Order {0} not found")]
    OrderNotFound(String),

    #[error("User {0} not found")]
    UserNotFound(String),

    #[error("Cannot move order from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order in status {0:?} cannot skip the queue")]
    NotSkippable(OrderStatus),

    #[error("Requested to skip {requested} orders but only {ahead} are ahead")]
    InsufficientQueueDepth { requested: u32, ahead: u32 },

    #[error("Skip costs {required} coins but balance is {balance}")]
    InsufficientCoins { required: i64, balance: i64 },

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Order {0} has no associated user to charge")]
    NoUser(String),

    #[error("{0}")]
    Validation(String),
}

/// Result alias for queue manager operations
pub type QueueResult<T> = Result<T, QueueError>;

impl From<QueueError> for AppError {
    fn from(err: QueueError) -> Self {
        let message = err.to_string();
        match err {
            QueueError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("order_id", id)
            }
            QueueError::UserNotFound(id) => {
                AppError::with_message(ErrorCode::UserNotFound, message).with_detail("user_id", id)
            }
            QueueError::InvalidTransition { from, to } => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, message)
                    .with_detail("from", format!("{:?}", from).to_lowercase())
                    .with_detail("to", format!("{:?}", to).to_lowercase())
            }
            QueueError::NotSkippable(status) => {
                AppError::with_message(ErrorCode::OrderNotSkippable, message)
                    .with_detail("status", format!("{:?}", status).to_lowercase())
            }
            QueueError::InsufficientQueueDepth { requested, ahead } => {
                AppError::with_message(ErrorCode::InsufficientQueueDepth, message)
                    .with_detail("requested", requested)
                    .with_detail("ahead", ahead)
            }
            QueueError::InsufficientCoins { required, balance } => {
                AppError::with_message(ErrorCode::InsufficientCoins, message)
                    .with_detail("required", required)
                    .with_detail("balance", balance)
            }
            QueueError::EmptyOrder => AppError::with_message(ErrorCode::OrderEmpty, message),
            QueueError::NoUser(id) => {
                AppError::with_message(ErrorCode::OrderHasNoUser, message).with_detail("order_id", id)
            }
            QueueError::Validation(_) => {
                AppError::with_message(ErrorCode::ValidationFailed, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_error_codes() {
        let err: AppError = QueueError::OrderNotFound("o-1".to_string()).into();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        let err: AppError = QueueError::InsufficientCoins {
            required: 100,
            balance: 40,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InsufficientCoins);
        let details = err.details.unwrap();
        assert_eq!(details.get("required").unwrap(), 100);
        assert_eq!(details.get("balance").unwrap(), 40);
    }

    #[test]
    fn test_transition_detail_uses_wire_casing() {
        let err: AppError = QueueError::InvalidTransition {
            from: OrderStatus::Ready,
            to: OrderStatus::Pending,
        }
        .into();
        assert_eq!(err.code, ErrorCode::InvalidStatusTransition);
        let details = err.details.unwrap();
        assert_eq!(details.get("from").unwrap(), "ready");
        assert_eq!(details.get("to").unwrap(), "pending");
    }
}
