//! Comment service
//!
//! Loads and threads a post's comments, and submits new comments and
//! replies. Threading is one level deep: replies attach to a top-level
//! comment, never to another reply.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{Comment, CommentThread};
use crate::domain::ports::backend::{NewComment, SocialApi};
use crate::error::AppError;
use crate::feed::normalizer::normalize_comment;

/// Groups a flat comment list into top-level threads.
///
/// Replies whose parent is missing, or whose parent is itself a reply, have
/// nowhere valid to hang and are dropped with a warning.
pub fn thread_comments(comments: Vec<Comment>) -> Vec<CommentThread> {
    let top_level_ids: HashSet<String> = comments
        .iter()
        .filter(|c| !c.is_reply())
        .map(|c| c.id.clone())
        .collect();

    let mut threads: Vec<CommentThread> = Vec::new();
    let mut replies: Vec<Comment> = Vec::new();

    for comment in comments {
        if comment.is_reply() {
            replies.push(comment);
        } else {
            threads.push(CommentThread {
                comment,
                replies: Vec::new(),
            });
        }
    }

    for reply in replies {
        let parent_id = reply.parent_comment_id.clone().unwrap_or_default();
        if !top_level_ids.contains(&parent_id) {
            tracing::warn!(
                "dropping reply {} with missing or nested parent {}",
                reply.id,
                parent_id
            );
            continue;
        }
        if let Some(thread) = threads.iter_mut().find(|t| t.comment.id == parent_id) {
            thread.replies.push(reply);
        }
    }

    threads
}

/// Service for reading and writing a post's comments.
pub struct CommentService<S: SocialApi> {
    api: Arc<S>,
}

impl<S: SocialApi> CommentService<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self { api }
    }

    /// Load and thread a post's comments. Unlike the feed, a failure here
    /// surfaces: the caller asked for this post specifically.
    pub async fn load_threads(&self, post_id: &str) -> Result<Vec<CommentThread>, AppError> {
        let raw = self.api.fetch_comments(post_id).await?;
        let comments: Vec<Comment> = raw.into_iter().filter_map(normalize_comment).collect();
        Ok(thread_comments(comments))
    }

    /// Submit a top-level comment, then return the post's fresh threads.
    pub async fn submit_comment(
        &self,
        post_id: &str,
        content: &str,
    ) -> Result<Vec<CommentThread>, AppError> {
        self.submit(post_id, content, None).await
    }

    /// Submit a reply to a top-level comment, then return fresh threads.
    pub async fn submit_reply(
        &self,
        post_id: &str,
        parent_comment_id: &str,
        content: &str,
    ) -> Result<Vec<CommentThread>, AppError> {
        self.submit(post_id, content, Some(parent_comment_id))
            .await
    }

    async fn submit(
        &self,
        post_id: &str,
        content: &str,
        parent_comment_id: Option<&str>,
    ) -> Result<Vec<CommentThread>, AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation(
                "comment content must not be empty".to_string(),
            ));
        }

        self.api
            .create_comment(&NewComment {
                post_id: post_id.to_string(),
                content: content.to_string(),
                parent_comment_id: parent_comment_id.map(str::to_string),
            })
            .await?;

        // The created comment's id and timestamp are server-assigned, so
        // re-fetch instead of guessing at them locally.
        self.load_threads(post_id).await
    }
}
