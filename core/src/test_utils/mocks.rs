//! In-memory backend doubles

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::ports::backend::{
    DirectoryEntry, LikeState, NewActivityPost, NewComment, NewTextPost, OperationStatus,
    RawComment, RawPost, SocialApi,
};
use crate::error::ApiError;
use crate::test_utils::fixtures::ts;

fn server_error(message: &str) -> ApiError {
    ApiError::Api {
        status: 500,
        message: message.to_string(),
    }
}

/// In-memory [`SocialApi`] with queued like responses and full recording of
/// everything written through it.
#[derive(Default)]
pub struct InMemorySocialApi {
    feed: Mutex<Vec<RawPost>>,
    feed_fails: bool,
    comments: Mutex<HashMap<String, Vec<RawComment>>>,
    users: Vec<DirectoryEntry>,
    users_fail: bool,
    operations: HashMap<String, Vec<OperationStatus>>,
    like_responses: Mutex<VecDeque<LikeState>>,

    user_list_calls: AtomicU32,
    operation_list_calls: AtomicU32,
    like_calls: Mutex<Vec<String>>,
    created_comments: Mutex<Vec<NewComment>>,
    created_text_posts: Mutex<Vec<NewTextPost>>,
    created_activity_posts: Mutex<Vec<NewActivityPost>>,
    next_comment_id: AtomicU32,
}

impl InMemorySocialApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_feed(self, feed: Vec<RawPost>) -> Self {
        *self.feed.lock().unwrap() = feed;
        self
    }

    pub fn with_failing_feed(mut self) -> Self {
        self.feed_fails = true;
        self
    }

    pub fn with_comments(self, post_id: &str, comments: Vec<RawComment>) -> Self {
        self.comments
            .lock()
            .unwrap()
            .insert(post_id.to_string(), comments);
        self
    }

    pub fn with_users(mut self, users: Vec<DirectoryEntry>) -> Self {
        self.users = users;
        self
    }

    pub fn with_failing_users(mut self) -> Self {
        self.users_fail = true;
        self
    }

    pub fn with_operations(mut self, execution_sheet_id: &str, ops: Vec<OperationStatus>) -> Self {
        self.operations.insert(execution_sheet_id.to_string(), ops);
        self
    }

    pub fn with_like_responses(self, responses: Vec<LikeState>) -> Self {
        *self.like_responses.lock().unwrap() = responses.into();
        self
    }

    pub fn user_list_calls(&self) -> u32 {
        self.user_list_calls.load(Ordering::SeqCst)
    }

    pub fn operation_list_calls(&self) -> u32 {
        self.operation_list_calls.load(Ordering::SeqCst)
    }

    /// Like endpoints hit, as `kind:id` keys in call order.
    pub fn like_calls(&self) -> Vec<String> {
        self.like_calls.lock().unwrap().clone()
    }

    pub fn created_comments(&self) -> Vec<NewComment> {
        self.created_comments.lock().unwrap().clone()
    }

    pub fn created_text_posts(&self) -> Vec<NewTextPost> {
        self.created_text_posts.lock().unwrap().clone()
    }

    pub fn created_activity_posts(&self) -> Vec<NewActivityPost> {
        self.created_activity_posts.lock().unwrap().clone()
    }

    fn toggle(&self, key: String) -> Result<LikeState, ApiError> {
        self.like_calls.lock().unwrap().push(key);
        self.like_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| server_error("no like response queued"))
    }
}

#[async_trait]
impl SocialApi for InMemorySocialApi {
    async fn fetch_feed(
        &self,
        execution_sheet_id: Option<&str>,
        _limit: u32,
    ) -> Result<Vec<RawPost>, ApiError> {
        if self.feed_fails {
            return Err(server_error("feed unavailable"));
        }
        let feed = self.feed.lock().unwrap().clone();
        Ok(match execution_sheet_id {
            Some(sheet) => feed
                .into_iter()
                .filter(|p| p.execution_sheet_id.as_deref() == Some(sheet))
                .collect(),
            None => feed,
        })
    }

    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>, ApiError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .get(post_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.created_comments.lock().unwrap().push(comment.clone());

        // Server-side echo: assign an id and make the comment visible to a
        // subsequent fetch_comments.
        let n = self.next_comment_id.fetch_add(1, Ordering::SeqCst) + 100;
        let stored = RawComment {
            id: Some(format!("c{n}")),
            post_id: Some(comment.post_id.clone()),
            content: Some(comment.content.clone()),
            author: Some("me".to_string()),
            timestamp: Some(ts(1_000 + n as i64)),
            parent_comment_id: comment.parent_comment_id.clone(),
            likes: Some(0),
            user_liked: Some(false),
        };
        self.comments
            .lock()
            .unwrap()
            .entry(comment.post_id.clone())
            .or_default()
            .push(stored);
        Ok(())
    }

    async fn toggle_photo_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle(format!("photo:{id}"))
    }

    async fn toggle_video_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle(format!("video:{id}"))
    }

    async fn toggle_text_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle(format!("text:{id}"))
    }

    async fn toggle_activity_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle(format!("activity:{id}"))
    }

    async fn toggle_comment_like(&self, comment_id: &str) -> Result<LikeState, ApiError> {
        self.toggle(format!("comment:{comment_id}"))
    }

    async fn list_users(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
        self.user_list_calls.fetch_add(1, Ordering::SeqCst);
        if self.users_fail {
            return Err(server_error("directory unavailable"));
        }
        Ok(self.users.clone())
    }

    async fn create_text_post(&self, post: &NewTextPost) -> Result<(), ApiError> {
        self.created_text_posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn create_activity_post(&self, post: &NewActivityPost) -> Result<(), ApiError> {
        self.created_activity_posts
            .lock()
            .unwrap()
            .push(post.clone());
        Ok(())
    }

    async fn list_operations(
        &self,
        execution_sheet_id: &str,
    ) -> Result<Vec<OperationStatus>, ApiError> {
        self.operation_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .operations
            .get(execution_sheet_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Wrapper that parks the first gated call (feed fetch or like toggle)
/// until the test releases it, for exercising concurrent-load and
/// concurrent-toggle behavior.
pub struct GatedSocialApi<S: SocialApi> {
    inner: S,
    gated: AtomicBool,
    entered: Notify,
    release: Notify,
}

impl<S: SocialApi> GatedSocialApi<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            gated: AtomicBool::new(true),
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Wait until the gated call has started and parked.
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let the parked call continue.
    pub fn release(&self) {
        self.release.notify_one();
    }

    async fn gate(&self) {
        // Only the first gated call parks; everything after runs through.
        if self.gated.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
    }
}

#[async_trait]
impl<S: SocialApi> SocialApi for GatedSocialApi<S> {
    async fn fetch_feed(
        &self,
        execution_sheet_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RawPost>, ApiError> {
        self.gate().await;
        self.inner.fetch_feed(execution_sheet_id, limit).await
    }

    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>, ApiError> {
        self.inner.fetch_comments(post_id).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.inner.create_comment(comment).await
    }

    async fn toggle_photo_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.gate().await;
        self.inner.toggle_photo_like(id).await
    }

    async fn toggle_video_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.gate().await;
        self.inner.toggle_video_like(id).await
    }

    async fn toggle_text_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.gate().await;
        self.inner.toggle_text_post_like(id).await
    }

    async fn toggle_activity_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.gate().await;
        self.inner.toggle_activity_post_like(id).await
    }

    async fn toggle_comment_like(&self, comment_id: &str) -> Result<LikeState, ApiError> {
        self.gate().await;
        self.inner.toggle_comment_like(comment_id).await
    }

    async fn list_users(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
        self.inner.list_users().await
    }

    async fn create_text_post(&self, post: &NewTextPost) -> Result<(), ApiError> {
        self.inner.create_text_post(post).await
    }

    async fn create_activity_post(&self, post: &NewActivityPost) -> Result<(), ApiError> {
        self.inner.create_activity_post(post).await
    }

    async fn list_operations(
        &self,
        execution_sheet_id: &str,
    ) -> Result<Vec<OperationStatus>, ApiError> {
        self.inner.list_operations(execution_sheet_id).await
    }
}
