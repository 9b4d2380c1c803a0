//! Community Post Model

use serde::{Deserialize, Serialize};

/// Comment on a community post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostComment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
    /// Submission time (UTC millis)
    pub timestamp: i64,
}

/// Community feed post (food photo + caption)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// Image reference (URL or emoji)
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: Vec<PostComment>,
    /// Submission time (UTC millis)
    pub timestamp: i64,
    /// Menu category tag, if the post is about a specific dish type
    pub menu_type: Option<String>,
}
