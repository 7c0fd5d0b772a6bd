//! Environment-driven configuration

use crate::error::AppError;

const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_FEED_LIMIT: u32 = 50;

/// Runtime configuration, loaded from the environment (and `.env` if present).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the TerraWatch backend, without a trailing slash.
    pub api_url: String,
    /// Bearer token for authenticated endpoints.
    pub api_token: String,
    /// Maximum number of posts requested per feed load.
    pub feed_limit: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_url = std::env::var("TERRAWATCH_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/').to_string();

        let api_token = std::env::var("TERRAWATCH_API_TOKEN").map_err(|_| {
            AppError::Validation("TERRAWATCH_API_TOKEN must be set".to_string())
        })?;

        let feed_limit = match std::env::var("TERRAWATCH_FEED_LIMIT") {
            Ok(raw) => raw.parse::<u32>().map_err(|_| {
                AppError::Validation(format!(
                    "TERRAWATCH_FEED_LIMIT must be a positive integer, got '{raw}'"
                ))
            })?,
            Err(_) => DEFAULT_FEED_LIMIT,
        };

        Ok(Config {
            api_url,
            api_token,
            feed_limit,
        })
    }
}
