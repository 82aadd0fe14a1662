// src/tools/trending.rs
use crate::client::MessariClient;
use crate::error::MessariError;
use crate::tool::{McpContent, Tool, ToolResult};
use crate::types::{Reference, RelatedPost, TrendingItem, TrendingTopic};
use async_trait::async_trait;
use serde_json::{json, Value};

/// Document type upstream uses for social-media posts.
pub const SOCIAL_POST_TYPE: &str = "socialPost";

/// Most topics carry a long document tail; only the top entries are useful.
const MAX_REFERENCES: usize = 2;

pub struct TrendingDetailsTool;

#[async_trait]
impl Tool for TrendingDetailsTool {
    fn name(&self) -> &str {
        "get_trending_details"
    }

    fn description(&self) -> &str {
        "Fetch trending topics filtered by comma-separated topic classes"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "classes": {
                    "type": "string",
                    "description": "Comma-separated topic classes, e.g. 'Legal and Regulatory'"
                }
            },
            "required": ["classes"]
        })
    }

    async fn execute(&self, parameters: Value) -> Result<ToolResult, MessariError> {
        let classes = parameters
            .get("classes")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MessariError::ToolError("Missing 'classes' parameter".into()))?;

        let client = MessariClient::shared()?;
        let response = client.trending_topics(classes).await?;

        let result = extract_trending_details(&response)?;
        log::info!("get_trending_details({}) ok", classes);

        let text = serde_json::to_string(&result)?;
        Ok(ToolResult::success_with_raw(
            vec![McpContent::text(text)],
            result,
        ))
    }
}

/// Map the trending-topics response into an ordered list of flattened
/// items. An absent or empty "data" list yields a structured error
/// object; sparse entries are filled with placeholder defaults.
pub fn extract_trending_details(response: &Value) -> Result<Value, MessariError> {
    let entries = match response.get("data").and_then(|d| d.as_array()) {
        Some(list) if !list.is_empty() => list,
        _ => return Ok(json!({ "error": "No data found for the prompt" })),
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        let topic: TrendingTopic = serde_json::from_value(entry.clone()).unwrap_or_default();
        items.push(flatten_topic(topic));
    }

    Ok(json!({ "topics": items }))
}

fn flatten_topic(topic: TrendingTopic) -> TrendingItem {
    let mut references = Vec::new();
    let mut related_posts = Vec::new();

    for doc in topic
        .top_documents
        .unwrap_or_default()
        .into_iter()
        .take(MAX_REFERENCES)
    {
        let reference = Reference {
            url: doc.url.unwrap_or_else(|| "No URL".to_string()),
            doc_type: doc.doc_type.unwrap_or_else(|| "Unknown".to_string()),
        };
        if reference.doc_type == SOCIAL_POST_TYPE {
            related_posts.push(RelatedPost {
                url: reference.url.clone(),
                content: "Content not available via this endpoint".to_string(),
            });
        }
        references.push(reference);
    }

    TrendingItem {
        title: topic.title.unwrap_or_else(|| "No title".to_string()),
        summary: topic.summary.unwrap_or_else(|| "No summary".to_string()),
        headline: topic.headline.unwrap_or_else(|| "No headline".to_string()),
        references,
        related_posts,
        rank: topic.rank,
        symbol: topic
            .assets
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|a| a.symbol),
    }
}
