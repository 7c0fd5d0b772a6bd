//! Feed post entities
//!
//! Backend post ids carry a type prefix (`photo_`, `video_`, `post_`,
//! `activity_`). [`PostTarget`] captures the kind and the bare resource id as
//! a tagged value at normalization time, so nothing downstream parses id
//! strings again.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::ports::backend::LikeState;

/// The four kinds of record that can appear in the unified feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Photo,
    Video,
    Text,
    Activity,
}

impl PostKind {
    /// The id prefix the backend uses for this kind, including the underscore.
    pub fn id_prefix(self) -> &'static str {
        match self {
            PostKind::Photo => "photo_",
            PostKind::Video => "video_",
            PostKind::Text => "post_",
            PostKind::Activity => "activity_",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PostKind::Photo => "photo",
            PostKind::Video => "video",
            PostKind::Text => "text",
            PostKind::Activity => "activity",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(PostKind::Photo),
            "video" => Ok(PostKind::Video),
            "text" | "post" => Ok(PostKind::Text),
            "activity" => Ok(PostKind::Activity),
            _ => Err(format!("Unknown post kind: {}", s)),
        }
    }
}

/// A like-able feed resource, tagged by kind with its bare backend id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PostTarget {
    Photo { id: String },
    Video { id: String },
    Text { id: String },
    Activity { id: String },
}

impl PostTarget {
    /// Builds a target from a full feed post id, stripping the kind prefix
    /// if present. Ids without the expected prefix are taken as-is.
    pub fn from_post_id(kind: PostKind, post_id: &str) -> Self {
        let id = post_id
            .strip_prefix(kind.id_prefix())
            .unwrap_or(post_id)
            .to_string();
        match kind {
            PostKind::Photo => PostTarget::Photo { id },
            PostKind::Video => PostTarget::Video { id },
            PostKind::Text => PostTarget::Text { id },
            PostKind::Activity => PostTarget::Activity { id },
        }
    }

    pub fn kind(&self) -> PostKind {
        match self {
            PostTarget::Photo { .. } => PostKind::Photo,
            PostTarget::Video { .. } => PostKind::Video,
            PostTarget::Text { .. } => PostKind::Text,
            PostTarget::Activity { .. } => PostKind::Activity,
        }
    }

    /// The bare backend resource id, without any kind prefix.
    pub fn resource_id(&self) -> &str {
        match self {
            PostTarget::Photo { id }
            | PostTarget::Video { id }
            | PostTarget::Text { id }
            | PostTarget::Activity { id } => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

/// Primary media of a photo or video post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostMedia {
    pub url: String,
    pub thumbnail_url: Option<String>,
}

/// One item of an activity post's media gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaAttachment {
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub kind: MediaKind,
}

/// Progress snapshot carried by activity posts.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityProgress {
    pub operation_code: String,
    pub operation_description: String,
    /// Progress added by this activity, in percent.
    pub percentage: f64,
    /// Total operation progress after this activity, in percent.
    pub total_percentage: f64,
    /// Area worked by this activity, in hectares.
    pub area_ha: f64,
}

/// A normalized feed post, ready for sorting and rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Full backend id, prefix included. Used for comment lookups.
    pub id: String,
    pub target: PostTarget,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    /// Primary media, present only for photo and video posts.
    pub media: Option<PostMedia>,
    /// Gallery attachments, only ever populated for activity posts.
    pub attachments: Vec<MediaAttachment>,
    pub like_count: u32,
    pub user_liked: bool,
    pub comment_count: u32,
    pub execution_sheet_id: Option<String>,
    /// Progress details, present only for activity posts.
    pub progress: Option<ActivityProgress>,
}

impl Post {
    /// Applies a server-confirmed like state. Counts always come from the
    /// backend response, never from local arithmetic.
    pub fn apply_like(&mut self, state: &LikeState) {
        self.user_liked = state.liked;
        self.like_count = state.like_count;
    }
}
