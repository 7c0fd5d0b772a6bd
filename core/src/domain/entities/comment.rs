//! Comment entities

use chrono::{DateTime, Utc};

use crate::domain::ports::backend::LikeState;

/// A normalized comment. `parent_comment_id` is `Some` for replies.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub author: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub like_count: u32,
    pub user_liked: bool,
}

impl Comment {
    pub fn is_reply(&self) -> bool {
        self.parent_comment_id.is_some()
    }

    /// Applies a server-confirmed like state, same policy as posts.
    pub fn apply_like(&mut self, state: &LikeState) {
        self.user_liked = state.liked;
        self.like_count = state.like_count;
    }
}

/// A top-level comment with its direct replies. Threading is one level deep;
/// replies never nest further.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentThread {
    pub comment: Comment,
    pub replies: Vec<Comment>,
}
