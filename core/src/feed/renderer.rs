//! Feed renderer
//!
//! Renders normalized posts and comment threads to terminal-readable text.
//! Rendering is pure: display names come in via [`DisplayNames`], timestamps
//! are formatted relative to a caller-supplied `now`.

use chrono::{DateTime, Utc};

use crate::app::directory_service::DisplayNames;
use crate::domain::entities::{CommentThread, MediaKind, Post, PostKind};

/// Render the whole feed to text.
pub fn render_feed(posts: &[Post], names: &impl DisplayNames, now: DateTime<Utc>) -> String {
    let mut buf = String::new();

    buf.push_str("# TerraWatch Social Feed\n\n");

    if posts.is_empty() {
        buf.push_str("_No posts yet._\n");
        return buf;
    }

    for post in posts {
        buf.push_str(&render_post(post, names, now));
        buf.push('\n');
    }

    buf
}

/// Render a single post.
pub fn render_post(post: &Post, names: &impl DisplayNames, now: DateTime<Utc>) -> String {
    let kind_tag = match post.target.kind() {
        PostKind::Photo => "[PHOTO]",
        PostKind::Video => "[VIDEO]",
        PostKind::Text => "[POST]",
        PostKind::Activity => "[ACTIVITY]",
    };

    let mut buf = format!(
        "{} {} - {}\n",
        kind_tag,
        names.display_name(&post.author),
        format_time_ago(post.timestamp, now)
    );

    if !post.description.is_empty() {
        buf.push_str(&format!("    {}\n", truncate(&post.description, 200)));
    }

    if let Some(progress) = &post.progress {
        buf.push_str(&format!(
            "    {} {} | +{:.1}% (total {:.1}%) | {:.2} ha\n",
            progress.operation_code,
            progress.operation_description,
            progress.percentage,
            progress.total_percentage,
            progress.area_ha
        ));
    }

    if let Some(media) = &post.media {
        buf.push_str(&format!("    media: {}\n", media.url));
    }

    if !post.attachments.is_empty() {
        for attachment in &post.attachments {
            let tag = match attachment.kind {
                MediaKind::Photo => "photo",
                MediaKind::Video => "video",
            };
            buf.push_str(&format!("    {}: {}\n", tag, attachment.url));
        }
    }

    let liked_marker = if post.user_liked { "liked" } else { "not liked" };
    buf.push_str(&format!(
        "    {} likes ({}) | {} comments | id: {}\n",
        post.like_count, liked_marker, post.comment_count, post.id
    ));

    buf
}

/// Render a post's comment threads, replies indented one level.
pub fn render_comment_threads(
    threads: &[CommentThread],
    names: &impl DisplayNames,
    now: DateTime<Utc>,
) -> String {
    let mut buf = String::new();

    if threads.is_empty() {
        buf.push_str("_No comments yet._\n");
        return buf;
    }

    for thread in threads {
        let comment = &thread.comment;
        buf.push_str(&format!(
            "{} ({}): {} [{} likes] (id: {})\n",
            names.display_name(&comment.author),
            format_time_ago(comment.timestamp, now),
            comment.content,
            comment.like_count,
            comment.id
        ));

        for reply in &thread.replies {
            buf.push_str(&format!(
                "    {} ({}): {} [{} likes] (id: {})\n",
                names.display_name(&reply.author),
                format_time_ago(reply.timestamp, now),
                reply.content,
                reply.like_count,
                reply.id
            ));
        }
    }

    buf
}

/// Format a timestamp relative to `now`. Future or just-past timestamps
/// render as "just now".
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    if elapsed.num_days() >= 1 {
        format!("{}d ago", elapsed.num_days())
    } else if elapsed.num_hours() >= 1 {
        format!("{}h ago", elapsed.num_hours())
    } else if elapsed.num_minutes() >= 1 {
        format!("{}m ago", elapsed.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Truncate a string with ellipsis, cutting only on char boundaries.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
