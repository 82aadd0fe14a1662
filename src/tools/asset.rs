// src/tools/asset.rs
use crate::client::{MessariClient, ASSET_DETAILS_PATH};
use crate::error::MessariError;
use crate::tool::{Tool, ToolResult};
use crate::types::{AssetDetail, AssetSnapshot, PriceHistory};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub struct AssetDetailsTool;

#[async_trait]
impl Tool for AssetDetailsTool {
    fn name(&self) -> &str {
        "get_asset_details"
    }

    fn description(&self) -> &str {
        "Fetch price, OHLCV, ROI and volatility details for a tracked asset slug"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "slug": {
                    "type": "string",
                    "description": "Asset slug, e.g. 'bitcoin'"
                }
            },
            "required": ["slug"]
        })
    }

    async fn execute(&self, parameters: Value) -> Result<ToolResult, MessariError> {
        let slug = parameters
            .get("slug")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MessariError::ToolError("Missing 'slug' parameter".into()))?;

        let client = MessariClient::shared()?;
        let response = client.asset_details(slug).await?;

        let text = extract_asset_details(&response, slug)?;
        log::info!("get_asset_details({}) ok", slug);

        Ok(ToolResult::success_with_text(text))
    }
}

/// Flatten the first asset in the response into an `AssetSnapshot` and
/// serialize it. An absent or empty "data" list yields the plain
/// "No data found" message; any deeper missing field is a schema error.
pub fn extract_asset_details(response: &Value, slug: &str) -> Result<String, MessariError> {
    let first = match response.get("data").and_then(|d| d.as_array()) {
        Some(list) if !list.is_empty() => &list[0],
        _ => return Ok(format!("No data found for {}", slug)),
    };

    let detail: AssetDetail =
        serde_json::from_value(first.clone()).map_err(|e| MessariError::Schema {
            endpoint: ASSET_DETAILS_PATH.to_string(),
            detail: e.to_string(),
        })?;

    let snapshot = build_snapshot(detail);
    Ok(serde_json::to_string(&snapshot)?)
}

fn build_snapshot(detail: AssetDetail) -> AssetSnapshot {
    let market = detail.market_data;
    let roi_data = market.return_on_investment;

    let mut roi = BTreeMap::new();
    roi.insert("7d".to_string(), roi_data.price_change_7d);
    roi.insert("30d".to_string(), roi_data.price_change_30d);
    roi.insert("90d".to_string(), roi_data.price_change_90d);
    roi.insert("1y".to_string(), roi_data.price_change_1y);

    let volatility = sample_std_dev(&[market.ohlcv_24_hour.close, market.ohlcv_1_hour.close]);

    AssetSnapshot {
        symbol: detail.symbol,
        name: detail.name,
        price_usd: market.price_usd,
        market_cap: market.circulating_marketcap_usd,
        rank: detail.rank,
        category: detail.category,
        sector: detail.sector,
        price_history: PriceHistory {
            open_24h: market.ohlcv_24_hour.open,
            current: market.price_usd,
        },
        ohlcv_24h: market.ohlcv_24_hour,
        ohlcv_1h: market.ohlcv_1_hour,
        roi,
        volatility,
    }
}

/// Sample standard deviation with an n-1 denominator. Callers guarantee
/// at least two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AssetSnapshot;
    use serde_json::json;

    fn asset_payload() -> Value {
        json!({
            "data": [{
                "symbol": "BTC",
                "name": "Bitcoin",
                "rank": 1,
                "category": "Payments",
                "sector": "Currencies",
                "marketData": {
                    "priceUsd": 110.0,
                    "circulatingMarketcapUsd": 2_000_000.0,
                    "ohlcv24HourUsd": {
                        "open": 95.0, "high": 112.0, "low": 94.0,
                        "close": 100.0, "volume": 5000.0
                    },
                    "ohlcv1HourUsd": {
                        "open": 108.0, "high": 111.0, "low": 107.0,
                        "close": 110.0, "volume": 400.0
                    },
                    "returnOnInvestment": {
                        "priceChange7d": 2.5,
                        "priceChange30d": -1.2,
                        "priceChange90d": 10.0,
                        "priceChange1y": 42.0
                    }
                }
            }]
        })
    }

    #[test]
    fn empty_data_returns_no_data_message() {
        let result = extract_asset_details(&json!({"data": []}), "bitcoin").unwrap();
        assert_eq!(result, "No data found for bitcoin");
    }

    #[test]
    fn missing_data_key_returns_no_data_message() {
        let result = extract_asset_details(&json!({"status": "ok"}), "solana").unwrap();
        assert_eq!(result, "No data found for solana");
    }

    #[test]
    fn volatility_is_sample_std_dev_of_the_two_closes() {
        let text = extract_asset_details(&asset_payload(), "bitcoin").unwrap();
        let snapshot: AssetSnapshot = serde_json::from_str(&text).unwrap();
        // closes are 100.0 and 110.0
        assert_eq!(snapshot.volatility, 7.0710678118654755);
    }

    #[test]
    fn snapshot_flattens_nested_fields() {
        let text = extract_asset_details(&asset_payload(), "bitcoin").unwrap();
        let snapshot: AssetSnapshot = serde_json::from_str(&text).unwrap();

        assert_eq!(snapshot.symbol, "BTC");
        assert_eq!(snapshot.name, "Bitcoin");
        assert_eq!(snapshot.rank, 1);
        assert_eq!(snapshot.price_usd, 110.0);
        assert_eq!(snapshot.market_cap, 2_000_000.0);
        assert_eq!(snapshot.price_history.open_24h, 95.0);
        assert_eq!(snapshot.price_history.current, 110.0);
        assert_eq!(snapshot.ohlcv_24h.close, 100.0);
        assert_eq!(snapshot.ohlcv_1h.close, 110.0);
        assert_eq!(snapshot.roi["7d"], 2.5);
        assert_eq!(snapshot.roi["1y"], 42.0);
    }

    #[test]
    fn missing_nested_field_is_a_schema_error() {
        let mut payload = asset_payload();
        payload["data"][0]["marketData"]
            .as_object_mut()
            .unwrap()
            .remove("priceUsd");

        let err = extract_asset_details(&payload, "bitcoin").unwrap_err();
        assert!(matches!(err, MessariError::Schema { .. }));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let text = extract_asset_details(&asset_payload(), "bitcoin").unwrap();
        let snapshot: AssetSnapshot = serde_json::from_str(&text).unwrap();
        let reparsed: AssetSnapshot =
            serde_json::from_str(&serde_json::to_string(&snapshot).unwrap()).unwrap();
        assert_eq!(snapshot, reparsed);
    }
}
