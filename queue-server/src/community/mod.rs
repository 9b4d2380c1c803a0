//! Community feed and reviews
//!
//! In-memory store for food-photo posts and order reviews. Less
//! strict than the order queue: the only invariants are rating bounds
//! and monotonically growing like counts.

use parking_lot::RwLock;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CommunityPost, PostComment, Review};
use shared::util::{new_id, now_millis};

/// Input for [`FeedStore::create_post`]
#[derive(Debug, Clone)]
pub struct NewPost {
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub image: String,
    pub caption: String,
    pub menu_type: Option<String>,
}

/// Input for [`FeedStore::add_comment`]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

/// Input for [`FeedStore::create_review`]
#[derive(Debug, Clone)]
pub struct NewReview {
    pub order_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub menu_items: Vec<String>,
}

#[derive(Debug, Default)]
struct FeedState {
    posts: Vec<CommunityPost>,
    reviews: Vec<Review>,
}

/// Thread-safe community store
#[derive(Debug, Default)]
pub struct FeedStore {
    state: RwLock<FeedState>,
}

impl FeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Posts ====================

    /// Posts, newest first
    pub fn list_posts(&self) -> Vec<CommunityPost> {
        let state = self.state.read();
        let mut posts = state.posts.clone();
        posts.sort_by_key(|p| std::cmp::Reverse(p.timestamp));
        posts
    }

    pub fn get_post(&self, post_id: &str) -> AppResult<CommunityPost> {
        let state = self.state.read();
        state
            .posts
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or_else(|| post_not_found(post_id))
    }

    pub fn create_post(&self, input: NewPost) -> AppResult<CommunityPost> {
        if input.caption.trim().is_empty() {
            return Err(AppError::validation("caption must not be empty"));
        }
        let post = CommunityPost {
            id: new_id(),
            user_id: input.user_id,
            user_name: input.user_name,
            user_avatar: input.user_avatar,
            image: input.image,
            caption: input.caption,
            likes: 0,
            comments: vec![],
            timestamp: now_millis(),
            menu_type: input.menu_type,
        };
        self.state.write().posts.push(post.clone());
        Ok(post)
    }

    /// Increment the like count of a post
    pub fn like_post(&self, post_id: &str) -> AppResult<CommunityPost> {
        let mut state = self.state.write();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| post_not_found(post_id))?;
        post.likes += 1;
        Ok(post.clone())
    }

    pub fn add_comment(&self, post_id: &str, input: NewComment) -> AppResult<CommunityPost> {
        if input.text.trim().is_empty() {
            return Err(AppError::validation("comment must not be empty"));
        }
        let mut state = self.state.write();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| post_not_found(post_id))?;
        post.comments.push(PostComment {
            id: new_id(),
            user_id: input.user_id,
            user_name: input.user_name,
            text: input.text,
            timestamp: now_millis(),
        });
        Ok(post.clone())
    }

    // ==================== Reviews ====================

    /// Reviews, newest first
    pub fn list_reviews(&self) -> Vec<Review> {
        let state = self.state.read();
        let mut reviews = state.reviews.clone();
        reviews.sort_by_key(|r| std::cmp::Reverse(r.timestamp));
        reviews
    }

    pub fn create_review(&self, input: NewReview) -> AppResult<Review> {
        if !(1..=5).contains(&input.rating) {
            return Err(
                AppError::validation("rating must be between 1 and 5")
                    .with_detail("rating", input.rating),
            );
        }
        let review = Review {
            id: new_id(),
            order_id: input.order_id,
            user_id: input.user_id,
            user_name: input.user_name,
            rating: input.rating,
            comment: input.comment,
            timestamp: now_millis(),
            menu_items: input.menu_items,
        };
        self.state.write().reviews.push(review.clone());
        Ok(review)
    }
}

fn post_not_found(post_id: &str) -> AppError {
    AppError::with_message(ErrorCode::PostNotFound, format!("Post {} not found", post_id))
        .with_detail("post_id", post_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_input(caption: &str) -> NewPost {
        NewPost {
            user_id: "u1".to_string(),
            user_name: "Tester".to_string(),
            user_avatar: "🦀".to_string(),
            image: "🍲".to_string(),
            caption: caption.to_string(),
            menu_type: Some("main".to_string()),
        }
    }

    #[test]
    fn test_create_and_list_posts() {
        let store = FeedStore::new();
        let post = store.create_post(post_input("so good")).unwrap();
        assert_eq!(post.likes, 0);

        let posts = store.list_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].caption, "so good");
    }

    #[test]
    fn test_create_post_rejects_blank_caption() {
        let store = FeedStore::new();
        let err = store.create_post(post_input("   ")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_like_post_increments() {
        let store = FeedStore::new();
        let post = store.create_post(post_input("yum")).unwrap();
        store.like_post(&post.id).unwrap();
        let post = store.like_post(&post.id).unwrap();
        assert_eq!(post.likes, 2);
    }

    #[test]
    fn test_like_unknown_post() {
        let store = FeedStore::new();
        let err = store.like_post("missing").unwrap_err();
        assert_eq!(err.code, ErrorCode::PostNotFound);
    }

    #[test]
    fn test_add_comment() {
        let store = FeedStore::new();
        let post = store.create_post(post_input("yum")).unwrap();
        let post = store
            .add_comment(
                &post.id,
                NewComment {
                    user_id: "u2".to_string(),
                    user_name: "Other".to_string(),
                    text: "looks great".to_string(),
                },
            )
            .unwrap();
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].text, "looks great");
    }

    #[test]
    fn test_review_rating_bounds() {
        let store = FeedStore::new();
        for rating in [0u8, 6] {
            let err = store
                .create_review(NewReview {
                    order_id: "o1".to_string(),
                    user_id: "u1".to_string(),
                    user_name: "Tester".to_string(),
                    rating,
                    comment: "meh".to_string(),
                    menu_items: vec![],
                })
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
        }
        assert!(store.list_reviews().is_empty());
    }

    #[test]
    fn test_create_review() {
        let store = FeedStore::new();
        let review = store
            .create_review(NewReview {
                order_id: "o1".to_string(),
                user_id: "u1".to_string(),
                user_name: "Tester".to_string(),
                rating: 5,
                comment: "amazing".to_string(),
                menu_items: vec!["Noodles".to_string()],
            })
            .unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(store.list_reviews().len(), 1);
    }
}
