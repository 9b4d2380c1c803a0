//! Unified error codes for the table-queue service
//!
//! Error codes are shared between the server and its clients so that
//! failures can be matched on a stable numeric value rather than a
//! message string. Codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order / queue errors
//! - 5xxx: Wallet errors
//! - 6xxx: Catalog errors
//! - 7xxx: Community errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order / Queue ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Status change violates the forward-only rule
    InvalidStatusTransition = 4002,
    /// Order is not in a status that allows skipping the queue
    OrderNotSkippable = 4003,
    /// Requested skip exceeds the eligible orders ahead
    InsufficientQueueDepth = 4004,
    /// Order has no items
    OrderEmpty = 4005,
    /// Order has no associated user to charge
    OrderHasNoUser = 4006,

    // ==================== 5xxx: Wallet ====================
    /// Coin balance is insufficient for the requested debit
    InsufficientCoins = 5001,
    /// User not found
    UserNotFound = 5002,

    // ==================== 6xxx: Catalog ====================
    /// Menu item not found
    MenuItemNotFound = 6001,

    // ==================== 7xxx: Community ====================
    /// Community post not found
    PostNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::OrderNotFound => "Order not found",
            Self::InvalidStatusTransition => "Order status can only move forward",
            Self::OrderNotSkippable => "Order is not in a skippable status",
            Self::InsufficientQueueDepth => "Not enough orders ahead to skip",
            Self::OrderEmpty => "Order must contain at least one item",
            Self::OrderHasNoUser => "Order has no associated user",

            Self::InsufficientCoins => "Not enough coins",
            Self::UserNotFound => "User not found",

            Self::MenuItemNotFound => "Menu item not found",

            Self::PostNotFound => "Post not found",

            Self::InternalError => "Internal server error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.code(), self.message())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),

            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::InvalidStatusTransition),
            4003 => Ok(Self::OrderNotSkippable),
            4004 => Ok(Self::InsufficientQueueDepth),
            4005 => Ok(Self::OrderEmpty),
            4006 => Ok(Self::OrderHasNoUser),

            5001 => Ok(Self::InsufficientCoins),
            5002 => Ok(Self::UserNotFound),

            6001 => Ok(Self::MenuItemNotFound),

            7001 => Ok(Self::PostNotFound),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::InsufficientQueueDepth.code(), 4004);
        assert_eq!(ErrorCode::InsufficientCoins.code(), 5001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::OrderNotFound,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::OrderNotSkippable,
            ErrorCode::InsufficientQueueDepth,
            ErrorCode::OrderEmpty,
            ErrorCode::OrderHasNoUser,
            ErrorCode::InsufficientCoins,
            ErrorCode::UserNotFound,
            ErrorCode::MenuItemNotFound,
            ErrorCode::PostNotFound,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(12345), Err(InvalidErrorCode(12345)));
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::InsufficientCoins).unwrap();
        assert_eq!(json, "5001");

        let code: ErrorCode = serde_json::from_str("4001").unwrap();
        assert_eq!(code, ErrorCode::OrderNotFound);
    }
}
