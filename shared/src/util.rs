/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate an opaque resource ID (UUID v4 string).
///
/// Orders, posts and reviews all use this format so IDs are
/// unguessable and collision-free without a central counter.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
