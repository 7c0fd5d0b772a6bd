//! Backend port: the trait the app layer talks to, plus the wire-level
//! types it exchanges.
//!
//! Wire structs mirror the backend's JSON as loosely as the backend sends
//! it: every field is defaulted so a record missing fields still
//! deserializes, and timestamps stay strings here. The normalizer owns
//! turning these into domain entities.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A feed record as the backend serves it, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPost {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub execution_sheet_id: Option<String>,
    pub description: Option<String>,
    pub uploaded_by: Option<String>,
    pub timestamp: Option<String>,
    pub photo_url: Option<String>,
    pub video_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub likes: Option<u32>,
    pub user_liked: Option<bool>,
    pub comments: Option<u32>,
    pub operation_code: Option<String>,
    pub operation_description: Option<String>,
    pub progress_percentage: Option<f64>,
    pub total_progress_percentage: Option<f64>,
    pub area_ha: Option<f64>,
    pub media: Option<Vec<RawMediaItem>>,
}

/// One entry in an activity post's media gallery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawMediaItem {
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// A comment as the backend serves it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawComment {
    pub id: Option<String>,
    pub post_id: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub timestamp: Option<String>,
    pub parent_comment_id: Option<String>,
    pub likes: Option<u32>,
    pub user_liked: Option<bool>,
}

/// One row of the user directory listing.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryEntry {
    pub username: String,
    pub name: Option<String>,
}

/// Server-confirmed like state after a toggle. Counts here are
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub liked: bool,
    pub like_count: u32,
}

/// Payload for creating a comment or a reply.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub post_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

/// Payload for creating a text post.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTextPost {
    pub execution_sheet_id: String,
    pub content: String,
}

/// Form payload for creating an activity post. Sent urlencoded, so every
/// value is already a string.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivityPost {
    pub execution_sheet_id: String,
    pub operation_code: String,
    pub description: String,
    pub progress_percentage: String,
    pub area_ha: String,
}

/// Status of one operation within an execution sheet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    pub operation_code: String,
    #[serde(default)]
    pub operation_description: Option<String>,
    #[serde(default)]
    pub progress_percentage: f64,
    #[serde(default)]
    pub total_area_ha: f64,
}

/// Everything the social core needs from the TerraWatch backend.
#[async_trait]
pub trait SocialApi: Send + Sync {
    /// Fetches the unified social feed, optionally scoped to one
    /// execution sheet.
    async fn fetch_feed(
        &self,
        execution_sheet_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RawPost>, ApiError>;

    /// Fetches all comments for a post, replies included, unthreaded.
    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>, ApiError>;

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError>;

    async fn toggle_photo_like(&self, id: &str) -> Result<LikeState, ApiError>;
    async fn toggle_video_like(&self, id: &str) -> Result<LikeState, ApiError>;
    async fn toggle_text_post_like(&self, id: &str) -> Result<LikeState, ApiError>;
    async fn toggle_activity_post_like(&self, id: &str) -> Result<LikeState, ApiError>;
    async fn toggle_comment_like(&self, comment_id: &str) -> Result<LikeState, ApiError>;

    /// Lists every user visible to the caller, for display-name resolution.
    async fn list_users(&self) -> Result<Vec<DirectoryEntry>, ApiError>;

    async fn create_text_post(&self, post: &NewTextPost) -> Result<(), ApiError>;
    async fn create_activity_post(&self, post: &NewActivityPost) -> Result<(), ApiError>;

    /// Lists the operations of an execution sheet with their current
    /// progress.
    async fn list_operations(
        &self,
        execution_sheet_id: &str,
    ) -> Result<Vec<OperationStatus>, ApiError>;
}
