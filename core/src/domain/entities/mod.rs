pub mod comment;
pub mod post;

pub use comment::{Comment, CommentThread};
pub use post::{
    ActivityProgress, MediaAttachment, MediaKind, Post, PostKind, PostMedia, PostTarget,
};
