// src/client.rs
use crate::{config::MessariConfig, error::MessariError};
use once_cell::sync::OnceCell;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

static SHARED_CLIENT: OnceCell<MessariClient> = OnceCell::new();

pub const CHAT_COMPLETIONS_PATH: &str = "/ai/v1/chat/completions";
pub const ASSET_DETAILS_PATH: &str = "/metrics/v2/assets/details";
pub const TRENDING_TOPICS_PATH: &str = "/ai/v1/classification/trending-topics";

pub struct MessariClient {
    config: MessariConfig,
    client: Client,
}

impl MessariClient {
    pub fn new(config: MessariConfig) -> Result<Self, MessariError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| MessariError::ToolError(e.to_string()))?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, MessariError> {
        let config = MessariConfig::from_env()
            .map_err(|_| MessariError::ToolError("Missing MESSARI_API_KEY".into()))?;
        Self::new(config)
    }

    /// Process-wide client. Built from the environment on first use so the
    /// connection pool is reused across tool invocations.
    pub fn shared() -> Result<&'static Self, MessariError> {
        SHARED_CLIENT.get_or_try_init(Self::from_env)
    }

    /// POST a single-message chat request and return the body verbatim,
    /// whatever the upstream sent back. No parsing, no status translation.
    pub async fn chat_completion(&self, message: &str) -> Result<String, MessariError> {
        let payload = json!({
            "messages": [
                { "role": "user", "content": message }
            ],
            "verbosity": "verbose",
            "response_format": "markdown",
            "inline_citations": true,
            "stream": false
        });

        let res = self
            .client
            .post(format!("{}{}", self.config.base_url, CHAT_COMPLETIONS_PATH))
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .header("x-messari-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        Ok(res.text().await?)
    }

    pub async fn asset_details(&self, slug: &str) -> Result<Value, MessariError> {
        let url = format!(
            "{}{}?slugs={}",
            self.config.base_url,
            ASSET_DETAILS_PATH,
            urlencoding::encode(slug)
        );
        self.get_json(&url, ASSET_DETAILS_PATH).await
    }

    pub async fn trending_topics(&self, classes: &str) -> Result<Value, MessariError> {
        let url = format!(
            "{}{}?classes={}",
            self.config.base_url,
            TRENDING_TOPICS_PATH,
            urlencoding::encode(classes)
        );
        self.get_json(&url, TRENDING_TOPICS_PATH).await
    }

    async fn get_json(&self, url: &str, endpoint: &str) -> Result<Value, MessariError> {
        let res = self
            .client
            .get(url)
            .header("accept", "application/json")
            .header("x-messari-api-key", &self.config.api_key)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MessariError::Upstream {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(res.json::<Value>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_client_is_built_once_and_reused() {
        std::env::set_var("MESSARI_API_KEY", "test-key");

        let first = MessariClient::shared().unwrap() as *const MessariClient;
        let second = MessariClient::shared().unwrap() as *const MessariClient;
        assert_eq!(first, second);
    }
}
