// src/types.rs
//
// Typed schemas for the Messari endpoints we call, plus the flattened
// structures returned to callers. Upstream field names follow the wire
// format (camelCase); downstream structs own their serialized key names.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------- upstream: asset details ----------

#[derive(Debug, Deserialize)]
pub struct AssetDetail {
    pub symbol: String,
    pub name: String,
    pub rank: u32,
    pub category: String,
    pub sector: String,
    #[serde(rename = "marketData")]
    pub market_data: MarketData,
}

#[derive(Debug, Deserialize)]
pub struct MarketData {
    #[serde(rename = "priceUsd")]
    pub price_usd: f64,
    #[serde(rename = "circulatingMarketcapUsd")]
    pub circulating_marketcap_usd: f64,
    #[serde(rename = "ohlcv24HourUsd")]
    pub ohlcv_24_hour: Ohlcv,
    #[serde(rename = "ohlcv1HourUsd")]
    pub ohlcv_1_hour: Ohlcv,
    #[serde(rename = "returnOnInvestment")]
    pub return_on_investment: ReturnOnInvestment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ohlcv {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Deserialize)]
pub struct ReturnOnInvestment {
    #[serde(rename = "priceChange7d")]
    pub price_change_7d: f64,
    #[serde(rename = "priceChange30d")]
    pub price_change_30d: f64,
    #[serde(rename = "priceChange90d")]
    pub price_change_90d: f64,
    #[serde(rename = "priceChange1y")]
    pub price_change_1y: f64,
}

// ---------- upstream: trending topics ----------

// Every field is defensive here: trending entries are frequently sparse
// and a missing or null field must not fail the whole listing. The list
// fields are Option because upstream sends an explicit null when a topic
// has no documents, and `#[serde(default)]` alone does not cover that.
#[derive(Debug, Default, Deserialize)]
pub struct TrendingTopic {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default, rename = "topDocuments")]
    pub top_documents: Option<Vec<TopDocument>>,
    #[serde(default)]
    pub assets: Option<Vec<TopicAsset>>,
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopDocument {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "type")]
    pub doc_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TopicAsset {
    #[serde(default)]
    pub symbol: Option<String>,
}

// ---------- downstream: flattened tool output ----------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetSnapshot {
    pub symbol: String,
    pub name: String,
    pub price_usd: f64,
    pub market_cap: f64,
    pub rank: u32,
    pub category: String,
    pub sector: String,
    pub price_history: PriceHistory,
    pub ohlcv_24h: Ohlcv,
    pub ohlcv_1h: Ohlcv,
    pub roi: BTreeMap<String, f64>,
    pub volatility: f64,
}

/// Two-point history: the 24h-ago open and the current price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceHistory {
    pub open_24h: f64,
    pub current: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "References")]
    pub references: Vec<Reference>,
    #[serde(rename = "RelatedPosts")]
    pub related_posts: Vec<RelatedPost>,
    #[serde(rename = "Rank", skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(rename = "Symbol", skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reference {
    pub url: String,
    #[serde(rename = "type")]
    pub doc_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedPost {
    pub url: String,
    pub content: String,
}
