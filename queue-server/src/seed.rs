//! Demo data loader
//!
//! Seeds the in-memory stores with a small Thai-restaurant data set:
//! menu catalog, one demo user with a coin balance, a few in-flight
//! orders, community posts, reviews and a month of sales history.
//! Everything goes through the normal mutation paths so the queue
//! invariants hold from the first request.

use chrono::{Duration, Utc};
use shared::models::{MenuCategory, MenuItem, OrderStatus, OrderType, SalesData, User};
use shared::util::now_millis;

use crate::community::{FeedStore, NewComment, NewPost, NewReview};
use crate::orders::{CreateOrderInput, NewOrderItem, QueueManager};

/// ID of the seeded demo user
pub const DEMO_USER_ID: &str = "user-1";
/// Starting coin balance of the demo user
pub const DEMO_USER_COINS: i64 = 150;

fn item(
    id: &str,
    name: &str,
    price: f64,
    image: &str,
    description: &str,
    category: MenuCategory,
    spicy_level: u8,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        price,
        image: image.to_string(),
        description: description.to_string(),
        category,
        spicy_level,
        is_available: true,
    }
}

/// The static menu catalog
pub fn menu_items() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        item(
            "pad-thai",
            "Pad Thai",
            120.0,
            "🍜",
            "Stir-fried rice noodles with shrimp, tofu and peanuts",
            Main,
            1,
        ),
        item(
            "fried-rice",
            "Fried Rice",
            90.0,
            "🍚",
            "Thai-style fried rice with egg and vegetables",
            Main,
            0,
        ),
        item(
            "tom-yum",
            "Tom Yum Goong",
            110.0,
            "🍲",
            "Hot and sour Thai soup with shrimp",
            Main,
            3,
        ),
        item(
            "green-curry",
            "Green Curry",
            130.0,
            "🥘",
            "Coconut chicken curry with Thai basil",
            Main,
            2,
        ),
        item(
            "spring-rolls",
            "Fresh Spring Rolls",
            60.0,
            "🥗",
            "Fresh vegetables wrapped in rice paper",
            Appetizer,
            0,
        ),
        item(
            "mango-sticky-rice",
            "Mango Sticky Rice",
            80.0,
            "🥭",
            "Sweet sticky rice with fresh mango and coconut milk",
            Dessert,
            0,
        ),
        item(
            "thai-tea",
            "Thai Iced Tea",
            45.0,
            "🧋",
            "Sweet creamy Thai tea served over ice",
            Drink,
            0,
        ),
        item(
            "papaya-salad",
            "Papaya Salad",
            70.0,
            "🥙",
            "Spicy green papaya salad with peanuts",
            Appetizer,
            3,
        ),
    ]
}

fn order_item(menu_item: &MenuItem, quantity: u32, customizations: Option<&str>) -> NewOrderItem {
    NewOrderItem {
        menu_item: menu_item.clone(),
        quantity,
        customizations: customizations.map(str::to_string),
    }
}

/// Load the demo user, in-flight orders, posts and reviews.
///
/// Seeding failures are logged and skipped rather than aborting
/// startup; demo data is best effort.
pub fn load_demo_data(queue: &QueueManager, feed: &FeedStore, menu: &[MenuItem]) {
    queue.register_user(User {
        id: DEMO_USER_ID.to_string(),
        name: "Somchai".to_string(),
        avatar: "😋".to_string(),
        coins: DEMO_USER_COINS,
        member_since: now_millis() - Duration::days(400).num_milliseconds(),
        favorite_items: vec!["pad-thai".to_string(), "tom-yum".to_string()],
        total_orders: 23,
    });

    let orders: [(Vec<NewOrderItem>, u32, Option<&str>, OrderType, OrderStatus); 3] = [
        (
            vec![
                order_item(&menu[0], 2, Some("extra spicy")),
                order_item(&menu[4], 1, None),
            ],
            5,
            None,
            OrderType::Game,
            OrderStatus::Cooking,
        ),
        (
            vec![order_item(&menu[2], 1, None), order_item(&menu[6], 2, None)],
            8,
            None,
            OrderType::Lazy,
            OrderStatus::Pending,
        ),
        (
            vec![order_item(&menu[3], 1, None), order_item(&menu[5], 1, None)],
            3,
            Some(DEMO_USER_ID),
            OrderType::Lazy,
            OrderStatus::Ready,
        ),
    ];

    for (items, table, user_id, order_type, status) in orders {
        let input = CreateOrderInput {
            items,
            table_number: Some(table),
            user_id: user_id.map(str::to_string),
            order_type,
        };
        match queue.create_order(input) {
            Ok(order) => {
                if status != OrderStatus::Pending {
                    if let Err(err) = queue.set_status(&order.id, status) {
                        tracing::warn!(%err, "Failed to set status on seeded order");
                    }
                }
            }
            Err(err) => tracing::warn!(%err, "Failed to seed order"),
        }
    }

    seed_feed(feed, menu);
}

fn seed_feed(feed: &FeedStore, menu: &[MenuItem]) {
    let posts = [
        (
            "user-2",
            "Narisa",
            menu[0].image.as_str(),
            "Best pad thai in town! Perfectly balanced flavors!",
            "main",
            24,
            Some(("user-3", "Prayut", "Looks amazing, I have to try this!")),
        ),
        (
            "user-3",
            "Prayut",
            menu[2].image.as_str(),
            "Tom yum challenge complete! Mouth on fire but so worth it!",
            "main",
            31,
            None,
        ),
        (
            "user-4",
            "Siriporn",
            menu[5].image.as_str(),
            "Perfect end to a perfect meal, mango sticky rice is the best!",
            "dessert",
            18,
            Some((DEMO_USER_ID, "Somchai", "That looks delicious!")),
        ),
    ];

    for (user_id, user_name, image, caption, menu_type, likes, comment) in posts {
        let created = feed.create_post(NewPost {
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            user_avatar: "🙂".to_string(),
            image: image.to_string(),
            caption: caption.to_string(),
            menu_type: Some(menu_type.to_string()),
        });
        let post = match created {
            Ok(post) => post,
            Err(err) => {
                tracing::warn!(%err, "Failed to seed post");
                continue;
            }
        };
        for _ in 0..likes {
            let _ = feed.like_post(&post.id);
        }
        if let Some((cid, cname, text)) = comment {
            let _ = feed.add_comment(
                &post.id,
                NewComment {
                    user_id: cid.to_string(),
                    user_name: cname.to_string(),
                    text: text.to_string(),
                },
            );
        }
    }

    let reviews = [
        (
            "user-2",
            "Narisa",
            5u8,
            "Delicious! The cooking game makes ordering so much fun!",
            vec!["Pad Thai", "Fresh Spring Rolls"],
        ),
        (
            "user-3",
            "Prayut",
            4,
            "Great food, but the rush-hour wait was a bit long",
            vec!["Tom Yum Goong", "Thai Iced Tea"],
        ),
        (
            "user-4",
            "Siriporn",
            5,
            "Love the coin system, skipped the queue and got my food fast!",
            vec!["Green Curry"],
        ),
    ];

    for (i, (user_id, user_name, rating, comment, items)) in reviews.into_iter().enumerate() {
        let result = feed.create_review(NewReview {
            order_id: format!("order-{}", i + 1),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            rating,
            comment: comment.to_string(),
            menu_items: items.into_iter().map(str::to_string).collect(),
        });
        if let Err(err) = result {
            tracing::warn!(%err, "Failed to seed review");
        }
    }
}

/// Thirty days of deterministic daily sales rollups ending yesterday
pub fn sales_history() -> Vec<SalesData> {
    let today = Utc::now().date_naive();
    (0..30)
        .map(|i| {
            let date = today - Duration::days(30 - i as i64);
            // deterministic spread in the 8000..23000 / 30..80 bands
            let revenue = 8000 + (i * 937) % 15000;
            let orders = 30 + (i * 17) % 50;
            SalesData {
                date: date.format("%Y-%m-%d").to_string(),
                revenue: revenue as f64,
                orders: orders as u32,
            }
        })
        .collect()
}
