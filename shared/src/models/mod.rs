//! Domain models shared between the server and its clients

pub mod community_post;
pub mod menu_item;
pub mod order;
pub mod review;
pub mod sales;
pub mod user;

pub use community_post::{CommunityPost, PostComment};
pub use menu_item::{MenuCategory, MenuItem};
pub use order::{Order, OrderItem, OrderStatus, OrderType};
pub use review::Review;
pub use sales::SalesData;
pub use user::User;
