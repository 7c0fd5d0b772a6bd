//! Feed normalization
//!
//! Turns the backend's loosely-shaped wire records into domain entities.
//! Malformed records degrade rather than fail the whole feed: unknown kinds
//! render as text posts, unparseable timestamps fall back to the epoch, and
//! only records with no id at all are dropped.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ActivityProgress, Comment, MediaAttachment, MediaKind, Post, PostKind, PostMedia, PostTarget,
};
use crate::domain::ports::backend::{RawComment, RawPost};

/// Parses a backend timestamp, falling back to the Unix epoch so a single
/// bad timestamp sorts last instead of sinking the load.
fn parse_timestamp(raw: Option<&str>, context: &str) -> DateTime<Utc> {
    match raw {
        Some(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(_) => {
                tracing::warn!("unparseable timestamp '{}' on {}", s, context);
                DateTime::UNIX_EPOCH
            }
        },
        None => {
            tracing::warn!("missing timestamp on {}", context);
            DateTime::UNIX_EPOCH
        }
    }
}

fn parse_kind(raw: Option<&str>, post_id: &str) -> PostKind {
    match raw.and_then(|s| s.parse::<PostKind>().ok()) {
        Some(kind) => kind,
        None => {
            tracing::warn!(
                "unknown post type {:?} on {}, rendering as text",
                raw,
                post_id
            );
            PostKind::Text
        }
    }
}

/// Normalizes one feed record. Returns `None` only when the record has no
/// id, since nothing downstream can address it.
pub fn normalize(raw: RawPost) -> Option<Post> {
    let id = match raw.id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::warn!("dropping feed record without an id");
            return None;
        }
    };

    let kind = parse_kind(raw.kind.as_deref(), &id);
    let target = PostTarget::from_post_id(kind, &id);
    let timestamp = parse_timestamp(raw.timestamp.as_deref(), &id);

    // Primary media only ever belongs to photo and video posts.
    let media = match kind {
        PostKind::Photo => raw.photo_url.map(|url| PostMedia {
            url,
            thumbnail_url: raw.thumbnail_url.clone(),
        }),
        PostKind::Video => raw.video_url.map(|url| PostMedia {
            url,
            thumbnail_url: raw.thumbnail_url.clone(),
        }),
        PostKind::Text | PostKind::Activity => None,
    };

    let (attachments, progress) = if kind == PostKind::Activity {
        let attachments = raw
            .media
            .unwrap_or_default()
            .into_iter()
            .filter_map(|item| {
                let url = item.url?;
                let kind = match item.kind.as_deref() {
                    Some("video") => MediaKind::Video,
                    _ => MediaKind::Photo,
                };
                Some(MediaAttachment {
                    url,
                    thumbnail_url: item.thumbnail_url,
                    kind,
                })
            })
            .collect();

        let progress = Some(ActivityProgress {
            operation_code: raw.operation_code.unwrap_or_default(),
            operation_description: raw.operation_description.unwrap_or_default(),
            percentage: raw.progress_percentage.unwrap_or_default(),
            total_percentage: raw.total_progress_percentage.unwrap_or_default(),
            area_ha: raw.area_ha.unwrap_or_default(),
        });

        (attachments, progress)
    } else {
        (Vec::new(), None)
    };

    Some(Post {
        id,
        target,
        author: raw.uploaded_by.unwrap_or_default(),
        timestamp,
        description: raw.description.unwrap_or_default(),
        media,
        attachments,
        like_count: raw.likes.unwrap_or_default(),
        user_liked: raw.user_liked.unwrap_or_default(),
        comment_count: raw.comments.unwrap_or_default(),
        execution_sheet_id: raw.execution_sheet_id,
        progress,
    })
}

/// Normalizes a wire comment. Comments without an id are dropped like posts.
pub fn normalize_comment(raw: RawComment) -> Option<Comment> {
    let id = match raw.id {
        Some(id) if !id.is_empty() => id,
        _ => {
            tracing::warn!("dropping comment without an id");
            return None;
        }
    };

    let timestamp = parse_timestamp(raw.timestamp.as_deref(), &id);

    Some(Comment {
        id,
        post_id: raw.post_id.unwrap_or_default(),
        parent_comment_id: raw.parent_comment_id.filter(|p| !p.is_empty()),
        author: raw.author.unwrap_or_default(),
        content: raw.content.unwrap_or_default(),
        timestamp,
        like_count: raw.likes.unwrap_or_default(),
        user_liked: raw.user_liked.unwrap_or_default(),
    })
}

/// Sorts posts newest first. The sort is stable, so records with equal
/// timestamps keep their arrival order.
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
