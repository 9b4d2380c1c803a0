//! Sales Statistics Model

use serde::{Deserialize, Serialize};

/// Daily sales rollup for the staff dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SalesData {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Revenue in currency unit
    pub revenue: f64,
    /// Number of orders completed that day
    pub orders: u32,
}
