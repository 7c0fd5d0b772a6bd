//! Feed service
//!
//! Loads the unified social feed: fetch, normalize, sort. Each load claims a
//! generation number; a load that finishes after a newer one started reports
//! itself superseded instead of handing back stale posts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::ports::backend::SocialApi;
use crate::feed::normalizer::{normalize, sort_newest_first};

/// Outcome of a feed load.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedLoad {
    /// Posts, normalized and sorted newest first.
    Loaded(Vec<Post>),
    /// A newer load started while this one was in flight. Discard.
    Superseded,
}

/// Service for loading the unified social feed.
pub struct FeedService<S: SocialApi> {
    api: Arc<S>,
    generation: AtomicU64,
}

impl<S: SocialApi> FeedService<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
        }
    }

    /// Load the feed, optionally scoped to one execution sheet.
    ///
    /// A fetch failure degrades to an empty feed rather than an error; the
    /// feed is a read surface and the caller has nothing useful to do with
    /// a transport failure beyond showing nothing.
    pub async fn load_feed(&self, execution_sheet_id: Option<&str>, limit: u32) -> FeedLoad {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let raw = match self.api.fetch_feed(execution_sheet_id, limit).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("feed fetch failed, showing empty feed: {}", e);
                Vec::new()
            }
        };

        let mut posts: Vec<Post> = raw.into_iter().filter_map(normalize).collect();
        sort_newest_first(&mut posts);

        if self.generation.load(Ordering::SeqCst) != generation {
            return FeedLoad::Superseded;
        }

        FeedLoad::Loaded(posts)
    }
}
