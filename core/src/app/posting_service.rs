//! Post creation
//!
//! Submits text posts and activity posts. Activity posts are validated
//! against the execution sheet's current operation progress before anything
//! is sent; the backend re-checks on its side.

use std::sync::Arc;

use crate::domain::ports::backend::{NewActivityPost, NewTextPost, SocialApi};
use crate::error::AppError;

/// What an accepted activity post did to the operation, for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityReceipt {
    /// Operation progress after this activity, capped at 100.
    pub total_percentage: f64,
    /// Area this activity covered, in hectares.
    pub area_ha: f64,
}

/// Service for creating feed posts.
pub struct PostingService<S: SocialApi> {
    api: Arc<S>,
}

impl<S: SocialApi> PostingService<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self { api }
    }

    /// Submit a text post to an execution sheet's feed.
    pub async fn submit_text_post(
        &self,
        execution_sheet_id: &str,
        content: &str,
    ) -> Result<(), AppError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation(
                "post content must not be empty".to_string(),
            ));
        }

        self.api
            .create_text_post(&NewTextPost {
                execution_sheet_id: execution_sheet_id.to_string(),
                content: content.to_string(),
            })
            .await?;
        Ok(())
    }

    /// Submit an activity post reporting `added_progress` percent on one of
    /// the sheet's operations.
    ///
    /// The worked area is derived from the operation's total area and the
    /// added percentage; totals past 100 are capped rather than rejected.
    pub async fn submit_activity_post(
        &self,
        execution_sheet_id: &str,
        operation_code: &str,
        added_progress: f64,
        description: &str,
    ) -> Result<ActivityReceipt, AppError> {
        if !(added_progress > 0.0 && added_progress <= 100.0) {
            return Err(AppError::Validation(format!(
                "added progress must be in (0, 100], got {added_progress}"
            )));
        }

        let operations = self.api.list_operations(execution_sheet_id).await?;
        let operation = operations
            .iter()
            .find(|op| op.operation_code == operation_code)
            .ok_or_else(|| AppError::OperationNotFound(operation_code.to_string()))?;

        if operation.progress_percentage >= 100.0 {
            return Err(AppError::OperationComplete(operation_code.to_string()));
        }

        let total_percentage = (operation.progress_percentage + added_progress).min(100.0);
        let area_ha = operation.total_area_ha * added_progress / 100.0;

        self.api
            .create_activity_post(&NewActivityPost {
                execution_sheet_id: execution_sheet_id.to_string(),
                operation_code: operation_code.to_string(),
                description: description.trim().to_string(),
                progress_percentage: format!("{added_progress}"),
                area_ha: format!("{area_ha:.2}"),
            })
            .await?;

        Ok(ActivityReceipt {
            total_percentage,
            area_ha,
        })
    }
}
