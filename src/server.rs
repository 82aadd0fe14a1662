// src/server.rs
use actix_web::{web, HttpRequest, HttpResponse, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::MessariConfig;
use crate::tool::ToolResolver;

#[derive(Debug)]
pub struct AppState {
    pub config: MessariConfig,
    pub session_id: Uuid,
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: MessariConfig) -> Self {
        Self {
            config,
            session_id: Uuid::new_v4(),
            start_time: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: Option<serde_json::Value>,
    pub result: Option<serde_json::Value>,
    pub error: Option<McpError>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

pub async fn handle_mcp_request(
    _req: HttpRequest,
    payload: web::Json<McpRequest>,
    _state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let req = payload.into_inner();
    let id = req.id.clone();
    let resolver = ToolResolver::default();

    let response = match req.method.as_str() {
        "tools/list" => McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(serde_json::json!({ "tools": resolver.list_tools() })),
            error: None,
        },

        "tools/call" => {
            if let Some(params) = req.params {
                let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
                let args = params.get("arguments").cloned().unwrap_or_default();

                let result = match resolver.resolve(name) {
                    Some(tool) => tool.execute(args).await.map_err(|e| e.to_string()),
                    None => Err(format!("Unknown tool: {}", name)),
                };

                match result {
                    Ok(tool_result) => McpResponse {
                        jsonrpc: "2.0".to_string(),
                        id,
                        result: Some(serde_json::json!({ "content": tool_result.content })),
                        error: None,
                    },
                    Err(msg) => McpResponse {
                        jsonrpc: "2.0".to_string(),
                        id,
                        result: None,
                        error: Some(McpError {
                            code: -32603,
                            message: msg,
                            data: None,
                        }),
                    },
                }
            } else {
                McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id,
                    result: None,
                    error: Some(McpError {
                        code: -32602,
                        message: "Missing parameters".into(),
                        data: None,
                    }),
                }
            }
        }

        _ => McpResponse {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(McpError {
                code: -32601,
                message: "Method not found".to_string(),
                data: None,
            }),
        },
    };

    Ok(HttpResponse::Ok().json(response))
}

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "session_id": state.session_id,
        "upstream": state.config.base_url,
        "uptime_seconds": (Utc::now() - state.start_time).num_seconds(),
    })))
}

pub async fn cors_handler() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Access-Control-Allow-Origin", "*"))
        .insert_header(("Access-Control-Allow-Methods", "POST, GET, OPTIONS"))
        .insert_header(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
        .finish()
}
