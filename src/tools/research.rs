// src/tools/research.rs
use crate::client::MessariClient;
use crate::error::MessariError;
use crate::tool::{Tool, ToolResult};
use async_trait::async_trait;
use serde_json::{json, Value};

pub struct ResearchTool;

#[async_trait]
impl Tool for ResearchTool {
    fn name(&self) -> &str {
        "get_research"
    }

    fn description(&self) -> &str {
        "Ask the Messari AI research endpoint a free-text question and get the raw response back"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "message": {
                    "type": "string",
                    "description": "Free-text research question"
                }
            },
            "required": ["message"]
        })
    }

    async fn execute(&self, parameters: Value) -> Result<ToolResult, MessariError> {
        let message = parameters
            .get("message")
            .and_then(|v| v.as_str())
            .ok_or_else(|| MessariError::ToolError("Missing 'message' parameter".into()))?;

        let client = MessariClient::shared()?;
        // Passthrough: the upstream body is returned untouched, success or not.
        let body = client.chat_completion(message).await?;
        log::info!("get_research ok ({} bytes)", body.len());

        Ok(ToolResult::success_with_text(body))
    }
}
