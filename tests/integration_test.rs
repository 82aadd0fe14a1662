// tests/integration_test.rs
use messari_mcp_client::tool::ToolResolver;
use messari_mcp_client::tools::asset::extract_asset_details;
use messari_mcp_client::tools::trending::extract_trending_details;
use serde_json::json;

#[test]
fn resolver_knows_exactly_the_three_tools() {
    let resolver = ToolResolver::default();

    for name in resolver.get_available_tool_names() {
        let tool = resolver.resolve(name).expect("tool should resolve");
        assert_eq!(tool.name(), name);
    }

    assert!(resolver.resolve("get_weather").is_none());
    assert_eq!(resolver.get_available_tool_names().len(), 3);
}

#[test]
fn listed_schemas_require_a_single_string_parameter() {
    let resolver = ToolResolver::default();
    let tools = resolver.list_tools();
    assert_eq!(tools.len(), 3);

    for tool in tools {
        let required = tool["inputSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);

        let param = required[0].as_str().unwrap();
        assert_eq!(tool["inputSchema"]["properties"][param]["type"], "string");
    }
}

#[test]
fn listed_schemas_match_the_tool_implementations() {
    let resolver = ToolResolver::default();
    for listed in resolver.list_tools() {
        let name = listed["name"].as_str().unwrap();
        let tool = resolver.resolve(name).unwrap();
        assert_eq!(tool.input_schema(), listed["inputSchema"]);
        assert_eq!(tool.description(), listed["description"]);
    }
}

#[test]
fn asset_extraction_end_to_end_shape() {
    let payload = json!({
        "data": [{
            "symbol": "ETH",
            "name": "Ethereum",
            "rank": 2,
            "category": "Infrastructure",
            "sector": "Smart Contract Platforms",
            "marketData": {
                "priceUsd": 2500.0,
                "circulatingMarketcapUsd": 300_000_000.0,
                "ohlcv24HourUsd": {
                    "open": 2400.0, "high": 2550.0, "low": 2390.0,
                    "close": 2450.0, "volume": 9000.0
                },
                "ohlcv1HourUsd": {
                    "open": 2480.0, "high": 2510.0, "low": 2470.0,
                    "close": 2500.0, "volume": 800.0
                },
                "returnOnInvestment": {
                    "priceChange7d": 1.1,
                    "priceChange30d": 4.2,
                    "priceChange90d": -3.0,
                    "priceChange1y": 20.0
                }
            }
        }]
    });

    let text = extract_asset_details(&payload, "ethereum").unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["symbol"], "ETH");
    assert_eq!(value["price_history"]["open_24h"], 2400.0);
    assert_eq!(value["price_history"]["current"], 2500.0);
    assert_eq!(value["roi"]["30d"], 4.2);
    // closes 2450 and 2500, mean 2475, sample variance 1250
    assert_eq!(value["volatility"], 1250.0_f64.sqrt());
}

#[test]
fn trending_extraction_end_to_end_shape() {
    let payload = json!({
        "data": [{
            "title": "Exchange enforcement",
            "summary": "Regulators move against offshore venues",
            "headline": "New actions announced",
            "rank": 1,
            "assets": [{ "symbol": "BNB" }],
            "topDocuments": [
                { "url": "https://social.example/p/9", "type": "socialPost" }
            ]
        }]
    });

    let result = extract_trending_details(&payload).unwrap();
    let item = &result["topics"][0];

    assert_eq!(item["Title"], "Exchange enforcement");
    assert_eq!(item["Rank"], 1);
    assert_eq!(item["Symbol"], "BNB");
    assert_eq!(item["References"].as_array().unwrap().len(), 1);
    assert_eq!(item["RelatedPosts"].as_array().unwrap().len(), 1);
}
