//! Wire-record factories for tests

use chrono::{TimeZone, Utc};

use crate::domain::ports::backend::{RawComment, RawPost};

/// RFC 3339 timestamp at `secs` seconds past the epoch.
pub fn ts(secs: i64) -> String {
    Utc.timestamp_opt(secs, 0).single().unwrap().to_rfc3339()
}

fn base_post(id: &str, kind: &str, author: &str, secs: i64) -> RawPost {
    RawPost {
        id: Some(id.to_string()),
        kind: Some(kind.to_string()),
        execution_sheet_id: Some("ES-1".to_string()),
        description: Some(format!("description of {id}")),
        uploaded_by: Some(author.to_string()),
        timestamp: Some(ts(secs)),
        likes: Some(0),
        user_liked: Some(false),
        comments: Some(0),
        ..Default::default()
    }
}

pub fn raw_photo_post(id: &str, author: &str, secs: i64) -> RawPost {
    RawPost {
        photo_url: Some(format!("https://cdn.example/{id}.jpg")),
        thumbnail_url: Some(format!("https://cdn.example/{id}_t.jpg")),
        ..base_post(id, "photo", author, secs)
    }
}

pub fn raw_video_post(id: &str, author: &str, secs: i64) -> RawPost {
    RawPost {
        video_url: Some(format!("https://cdn.example/{id}.mp4")),
        thumbnail_url: Some(format!("https://cdn.example/{id}_t.jpg")),
        ..base_post(id, "video", author, secs)
    }
}

pub fn raw_text_post(id: &str, author: &str, secs: i64) -> RawPost {
    base_post(id, "text", author, secs)
}

pub fn raw_activity_post(id: &str, author: &str, secs: i64) -> RawPost {
    RawPost {
        operation_code: Some("OP-17".to_string()),
        operation_description: Some("Thinning".to_string()),
        progress_percentage: Some(15.0),
        total_progress_percentage: Some(60.0),
        area_ha: Some(3.75),
        ..base_post(id, "activity", author, secs)
    }
}

pub fn raw_comment(
    id: &str,
    post_id: &str,
    author: &str,
    content: &str,
    parent: Option<&str>,
) -> RawComment {
    RawComment {
        id: Some(id.to_string()),
        post_id: Some(post_id.to_string()),
        content: Some(content.to_string()),
        author: Some(author.to_string()),
        timestamp: Some(ts(500)),
        parent_comment_id: parent.map(str::to_string),
        likes: Some(0),
        user_liked: Some(false),
    }
}
