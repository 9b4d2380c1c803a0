//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MenuCategory {
    Main,
    Appetizer,
    Dessert,
    Drink,
}

/// Menu item (catalog entry)
///
/// Orders store a snapshot of this struct at creation time, so later
/// price or availability changes never affect past orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Opaque item ID (String)
    pub id: String,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    /// Image reference (URL or emoji)
    pub image: String,
    pub description: String,
    pub category: MenuCategory,
    /// Spiciness 0-3
    pub spicy_level: u8,
    pub is_available: bool,
}
