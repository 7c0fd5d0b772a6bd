//! TerraWatch backend REST client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::domain::ports::backend::{
    DirectoryEntry, LikeState, NewActivityPost, NewComment, NewTextPost, OperationStatus,
    RawComment, RawPost, SocialApi,
};
use crate::error::ApiError;

/// Implementation of the backend port over the TerraWatch REST API.
pub struct HttpSocialApi {
    http: Client,
    base_url: String,
    token: String,
}

impl HttpSocialApi {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/rest{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(ApiError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 401 {
            Err(ApiError::Unauthorized)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn toggle_like(&self, path: String) -> Result<LikeState, ApiError> {
        let resp = self
            .http
            .post(self.api_url(&path))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let state: LikeResponse = self.handle_response(resp).await?;
        Ok(LikeState {
            liked: state.liked,
            like_count: state.like_count,
        })
    }
}

#[derive(Serialize)]
struct ListUsersRequest<'a> {
    username: &'a str,
}

/// The backend wraps like toggles in a success envelope.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LikeResponse {
    #[allow(dead_code)]
    #[serde(default)]
    success: bool,
    liked: bool,
    like_count: u32,
}

#[async_trait]
impl SocialApi for HttpSocialApi {
    async fn fetch_feed(
        &self,
        execution_sheet_id: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RawPost>, ApiError> {
        let mut url = self.api_url(&format!("/executionsheet/social-feed?limit={limit}"));
        if let Some(sheet_id) = execution_sheet_id {
            url.push_str(&format!("&executionSheetId={}", encode(sheet_id)));
        }
        tracing::debug!("fetch_feed: fetching {}", url);

        let resp = self
            .http
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn fetch_comments(&self, post_id: &str) -> Result<Vec<RawComment>, ApiError> {
        let resp = self
            .http
            .get(self.api_url(&format!(
                "/executionsheet/social/comments/{}",
                encode(post_id)
            )))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.api_url("/executionsheet/social/comment"))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(comment)
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn toggle_photo_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle_like(format!("/executionsheet/photo/{}/like", encode(id)))
            .await
    }

    async fn toggle_video_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle_like(format!("/executionsheet/video/{}/like", encode(id)))
            .await
    }

    async fn toggle_text_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle_like(format!(
            "/executionsheet/social/text-post/{}/like",
            encode(id)
        ))
        .await
    }

    async fn toggle_activity_post_like(&self, id: &str) -> Result<LikeState, ApiError> {
        self.toggle_like(format!(
            "/executionsheet/social/activity-post/{}/like",
            encode(id)
        ))
        .await
    }

    async fn toggle_comment_like(&self, comment_id: &str) -> Result<LikeState, ApiError> {
        self.toggle_like(format!(
            "/executionsheet/social/comment/{}/like",
            encode(comment_id)
        ))
        .await
    }

    async fn list_users(&self) -> Result<Vec<DirectoryEntry>, ApiError> {
        // Empty username means "everyone visible to the caller".
        let resp = self
            .http
            .post(self.api_url("/list/users"))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&ListUsersRequest { username: "" })
            .send()
            .await?;

        self.handle_response(resp).await
    }

    async fn create_text_post(&self, post: &NewTextPost) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.api_url("/executionsheet/social/text-post"))
            .header("Authorization", format!("Bearer {}", self.token))
            .json(post)
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn create_activity_post(&self, post: &NewActivityPost) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.api_url("/executionsheet/social/activity-post"))
            .header("Authorization", format!("Bearer {}", self.token))
            .form(post)
            .send()
            .await?;

        self.handle_empty_response(resp).await
    }

    async fn list_operations(
        &self,
        execution_sheet_id: &str,
    ) -> Result<Vec<OperationStatus>, ApiError> {
        let resp = self
            .http
            .get(self.api_url(&format!(
                "/executionsheet/{}/operations",
                encode(execution_sheet_id)
            )))
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        self.handle_response(resp).await
    }
}
