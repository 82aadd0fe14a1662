// src/config.rs
use anyhow::Result;

#[derive(Clone, Debug)]
pub struct MessariConfig {
    pub base_url: String,
    pub api_key: String,
}

impl MessariConfig {
    pub fn new(base_url: String, api_key: String) -> Result<Self> {
        Ok(Self { base_url, api_key })
    }

    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("MESSARI_BASE_URL")
            .unwrap_or_else(|_| "https://api.messari.io".to_string());
        let api_key = std::env::var("MESSARI_API_KEY")?;
        Ok(Self { base_url, api_key })
    }
}
