//! Display-name directory
//!
//! Resolves usernames to human display names from the backend's user
//! listing. The directory is loaded once and injected wherever names are
//! rendered; lookups are synchronous against the cached map.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::ports::backend::SocialApi;

/// Placeholder the backend stores for accounts that never set a name.
const NAME_NOT_DEFINED: &str = "NOT DEFINED";

/// Anything that can map a username to something fit for display.
pub trait DisplayNames {
    fn display_name(&self, username: &str) -> String;
}

/// Pass-through resolver: the username is the display name. Used before the
/// directory has loaded, and in rendering tests.
pub struct RawUsernames;

impl DisplayNames for RawUsernames {
    fn display_name(&self, username: &str) -> String {
        username.to_string()
    }
}

/// Cached username -> display-name directory over the backend user listing.
pub struct DirectoryService<S: SocialApi> {
    api: Arc<S>,
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl<S: SocialApi> DirectoryService<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self {
            api,
            cache: RwLock::new(None),
        }
    }

    /// Load the directory if it has not been loaded yet. A listing failure
    /// leaves the cache unloaded, so names fall back to raw usernames and a
    /// later load can retry.
    pub async fn load(&self) {
        let loaded = match self.cache.read() {
            Ok(cache) => cache.is_some(),
            Err(_) => return,
        };
        if loaded {
            return;
        }
        self.populate().await;
    }

    /// Drop the cached directory and load it again.
    pub async fn refresh(&self) {
        if let Ok(mut cache) = self.cache.write() {
            *cache = None;
        }
        self.populate().await;
    }

    async fn populate(&self) {
        let entries = match self.api.list_users().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("user directory load failed, using raw usernames: {}", e);
                return;
            }
        };

        let map: HashMap<String, String> = entries
            .into_iter()
            .filter_map(|entry| {
                let name = entry.name?;
                if name.is_empty() || name == NAME_NOT_DEFINED {
                    return None;
                }
                Some((entry.username, name))
            })
            .collect();

        tracing::debug!("user directory loaded: {} names", map.len());
        if let Ok(mut cache) = self.cache.write() {
            *cache = Some(map);
        }
    }
}

impl<S: SocialApi> DisplayNames for DirectoryService<S> {
    /// Resolve a username. Unloaded directory, unknown user, or the
    /// backend's "NOT DEFINED" sentinel all fall back to the raw username.
    fn display_name(&self, username: &str) -> String {
        match self.cache.read() {
            Ok(cache) => cache
                .as_ref()
                .and_then(|map| map.get(username).cloned())
                .unwrap_or_else(|| username.to_string()),
            Err(_) => username.to_string(),
        }
    }
}
