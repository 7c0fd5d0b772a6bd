//! Like interactions
//!
//! Dispatches like toggles to the right backend endpoint for the target
//! kind, and guards each target so only one toggle per target is in flight
//! at a time. Returned counts are the server's word; nothing here does
//! local like arithmetic.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::entities::PostTarget;
use crate::domain::ports::backend::{LikeState, SocialApi};
use crate::error::AppError;

/// Service for toggling likes on posts and comments.
pub struct InteractionService<S: SocialApi> {
    api: Arc<S>,
    in_flight: Mutex<HashSet<String>>,
}

impl<S: SocialApi> InteractionService<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self {
            api,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Toggle the caller's like on a post. Rejects with
    /// [`AppError::LikeInFlight`] if a toggle for the same target has not
    /// come back yet.
    pub async fn toggle_post_like(&self, target: &PostTarget) -> Result<LikeState, AppError> {
        let key = format!("{}:{}", target.kind(), target.resource_id());
        self.claim(&key)?;

        let result = match target {
            PostTarget::Photo { id } => self.api.toggle_photo_like(id).await,
            PostTarget::Video { id } => self.api.toggle_video_like(id).await,
            PostTarget::Text { id } => self.api.toggle_text_post_like(id).await,
            PostTarget::Activity { id } => self.api.toggle_activity_post_like(id).await,
        };

        self.release(&key);
        Ok(result?)
    }

    /// Toggle the caller's like on a comment, under the same guard.
    pub async fn toggle_comment_like(&self, comment_id: &str) -> Result<LikeState, AppError> {
        let key = format!("comment:{comment_id}");
        self.claim(&key)?;

        let result = self.api.toggle_comment_like(comment_id).await;

        self.release(&key);
        Ok(result?)
    }

    fn claim(&self, key: &str) -> Result<(), AppError> {
        let mut in_flight = self
            .in_flight
            .lock()
            .map_err(|_| AppError::Validation("like guard poisoned".to_string()))?;
        if !in_flight.insert(key.to_string()) {
            return Err(AppError::LikeInFlight(key.to_string()));
        }
        Ok(())
    }

    fn release(&self, key: &str) {
        if let Ok(mut in_flight) = self.in_flight.lock() {
            in_flight.remove(key);
        }
    }
}
