//! Review Model

use serde::{Deserialize, Serialize};

/// Customer review of a past order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub user_name: String,
    /// Star rating 1-5
    pub rating: u8,
    pub comment: String,
    /// Submission time (UTC millis)
    pub timestamp: i64,
    /// Names of the menu items covered by this review
    pub menu_items: Vec<String>,
}
