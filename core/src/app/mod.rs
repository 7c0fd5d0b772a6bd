pub mod comment_service;
pub mod directory_service;
pub mod feed_service;
pub mod interaction_service;
pub mod posting_service;

pub use comment_service::CommentService;
pub use directory_service::{DirectoryService, DisplayNames, RawUsernames};
pub use feed_service::{FeedLoad, FeedService};
pub use interaction_service::InteractionService;
pub use posting_service::{ActivityReceipt, PostingService};
