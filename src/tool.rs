// src/tool.rs
use async_trait::async_trait;
use crate::error::MessariError;
use serde_json::Value;
use serde::{Deserialize, Serialize};

// MCP-compatible content structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl McpContent {
    pub fn text(text: String) -> Self {
        Self {
            content_type: "text".to_string(),
            text,
        }
    }
}

// Tool result for MCP compatibility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<McpContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
    // Raw value for existing integrations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<Value>,
}

impl ToolResult {
    pub fn success_with_text(text: String) -> Self {
        Self {
            content: vec![McpContent::text(text)],
            is_error: Some(false),
            raw_value: None,
        }
    }

    pub fn success_with_raw(content: Vec<McpContent>, raw: Value) -> Self {
        Self {
            content,
            is_error: Some(false),
            raw_value: Some(raw),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            content: vec![McpContent::text(format!("Error: {}", message))],
            is_error: Some(true),
            raw_value: None,
        }
    }
}

#[async_trait]
pub trait Tool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;

    async fn execute(&self, parameters: Value) -> Result<ToolResult, MessariError>;
}

pub struct ToolResolver;

impl Default for ToolResolver {
    fn default() -> Self {
        Self
    }
}

impl ToolResolver {
    pub fn resolve(&self, name: &str) -> Option<Box<dyn Tool + Send + Sync>> {
        match name {
            "get_research" => Some(Box::new(crate::tools::research::ResearchTool)),
            "get_asset_details" => Some(Box::new(crate::tools::asset::AssetDetailsTool)),
            "get_trending_details" => Some(Box::new(crate::tools::trending::TrendingDetailsTool)),
            _ => None,
        }
    }

    pub fn get_available_tool_names(&self) -> Vec<&'static str> {
        vec!["get_research", "get_asset_details", "get_trending_details"]
    }

    pub fn list_tools(&self) -> Vec<Value> {
        vec![
            serde_json::json!({
                "name": "get_research",
                "description": "Ask the Messari AI research endpoint a free-text question and get the raw response back",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "message": {
                            "type": "string",
                            "description": "Free-text research question"
                        }
                    },
                    "required": ["message"]
                }
            }),
            serde_json::json!({
                "name": "get_asset_details",
                "description": "Fetch price, OHLCV, ROI and volatility details for a tracked asset slug",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "slug": {
                            "type": "string",
                            "description": "Asset slug, e.g. 'bitcoin'"
                        }
                    },
                    "required": ["slug"]
                }
            }),
            serde_json::json!({
                "name": "get_trending_details",
                "description": "Fetch trending topics filtered by comma-separated topic classes",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "classes": {
                            "type": "string",
                            "description": "Comma-separated topic classes, e.g. 'Legal and Regulatory'"
                        }
                    },
                    "required": ["classes"]
                }
            })
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_result_is_flagged_and_prefixed() {
        let result = ToolResult::error("upstream exploded".to_string());
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].content_type, "text");
        assert_eq!(result.content[0].text, "Error: upstream exploded");
        assert!(result.raw_value.is_none());
    }

    #[test]
    fn text_result_carries_the_body_unmodified() {
        let result = ToolResult::success_with_text("raw body".to_string());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content[0].text, "raw body");
    }
}
