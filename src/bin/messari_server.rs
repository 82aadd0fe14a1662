// src/bin/messari_server.rs
use actix_web::{post, web, App, HttpRequest, HttpServer, middleware::Logger};
use actix_web_lab::sse::{Data, Event, Sse};
use tokio_stream::wrappers::ReceiverStream;
use tokio::sync::mpsc;
use std::convert::Infallible;
use std::env;
use dotenv::dotenv;

use messari_mcp_client::server::{
    cors_handler, handle_mcp_request, health_check, AppState,
};
use messari_mcp_client::tool::{ToolResolver, ToolResult};
use messari_mcp_client::MessariConfig;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct InvokeRequest {
    tool: String,
    parameters: Value,
}

fn authorized(req: &HttpRequest) -> bool {
    let expected_token = env::var("MCP_AUTH_TOKEN").unwrap_or_default();
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");
    auth_header.starts_with("Bearer ") && auth_header.ends_with(&expected_token)
}

#[post("/sse")]
async fn sse_tool(
    req: HttpRequest,
    req_body: web::Json<InvokeRequest>,
) -> Sse<ReceiverStream<Result<Event, Infallible>>> {
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(8);

    if !authorized(&req) {
        let _ = tx.send(Ok(Event::Data(Data::new("Unauthorized")))).await;
        return Sse::from_stream(ReceiverStream::new(rx));
    }

    let tool_name = req_body.tool.clone();
    let parameters = req_body.parameters.clone();

    tokio::spawn(async move {
        let start_time = chrono::Utc::now();
        let _ = tx
            .send(Ok(Event::Comment(
                format!("Tool '{}' execution started at {}", tool_name, start_time).into(),
            )))
            .await;

        let resolver = ToolResolver::default();
        let result = match resolver.resolve(&tool_name) {
            Some(tool) => {
                let _ = tx
                    .send(Ok(Event::Data(Data::new(format!(
                        "[progress] Executing {} tool...",
                        tool_name
                    )))))
                    .await;

                match tool.execute(parameters).await {
                    Ok(tool_result) => {
                        for content in &tool_result.content {
                            let _ = tx.send(Ok(Event::Data(Data::new(content.text.clone())))).await;
                        }
                        Ok(())
                    }
                    Err(e) => Err(format!("Tool execution error: {}", e)),
                }
            }
            None => Err(format!("Tool '{}' not found", tool_name)),
        };

        let final_message = match result {
            Ok(()) => Event::Data(Data::new(format!(
                "[completed] Tool '{}' executed successfully",
                tool_name
            ))),
            Err(e) => Event::Data(Data::new(format!("[error] {}", e))),
        };

        let end_time = chrono::Utc::now();
        let _ = tx.send(Ok(final_message)).await;
        let _ = tx
            .send(Ok(Event::Comment(
                format!(
                    "Tool '{}' finished at {} (duration: {}ms)",
                    tool_name,
                    end_time,
                    (end_time - start_time).num_milliseconds()
                )
                .into(),
            )))
            .await;
    });

    Sse::from_stream(ReceiverStream::new(rx))
}

#[post("/invoke")]
async fn invoke_tool(
    req: HttpRequest,
    req_body: web::Json<InvokeRequest>,
) -> Result<actix_web::HttpResponse, actix_web::Error> {
    if !authorized(&req) {
        return Ok(actix_web::HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Unauthorized",
            "message": "Invalid or missing authorization token"
        })));
    }

    let tool_name = &req_body.tool;
    let parameters = req_body.parameters.clone();

    let resolver = ToolResolver::default();
    match resolver.resolve(tool_name) {
        Some(tool) => match tool.execute(parameters).await {
            Ok(tool_result) => Ok(actix_web::HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "tool": tool_name,
                "content": tool_result.content,
                "is_error": tool_result.is_error.unwrap_or(false),
                "raw_data": tool_result.raw_value
            }))),
            Err(e) => {
                let failure = ToolResult::error(format!("Tool execution failed: {}", e));
                Ok(actix_web::HttpResponse::InternalServerError().json(
                    serde_json::json!({
                        "success": false,
                        "tool": tool_name,
                        "content": failure.content,
                        "is_error": failure.is_error.unwrap_or(true)
                    }),
                ))
            }
        },
        None => Ok(actix_web::HttpResponse::NotFound().json(serde_json::json!({
            "success": false,
            "tool": tool_name,
            "error": format!("Tool '{}' not found", tool_name)
        }))),
    }
}

#[actix_web::get("/tools")]
async fn list_tools() -> Result<actix_web::HttpResponse, actix_web::Error> {
    let resolver = ToolResolver::default();
    let tools = resolver.list_tools();

    Ok(actix_web::HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "tools": tools,
        "count": tools.len()
    })))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = MessariConfig::from_env().expect("Missing MESSARI_API_KEY");
    let state = web::Data::new(AppState::new(config));
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    println!("🚀 Messari MCP HTTP Server running on http://{}", bind_address);
    println!("📋 Available endpoints:");
    println!("  • POST /mcp          - MCP JSON-RPC protocol");
    println!("  • POST /sse          - Server-Sent Events tool execution");
    println!("  • POST /invoke       - Direct tool invocation");
    println!("  • GET  /tools        - List available tools");
    println!("  • GET  /health       - Health check");
    println!("📚 Available tools: get_research, get_asset_details, get_trending_details");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .route("/mcp", web::post().to(handle_mcp_request))
            .route("/health", web::get().to(health_check))
            .service(list_tools)
            .service(invoke_tool)
            .service(sse_tool)
            .default_service(web::to(cors_handler))
    })
    .bind(&bind_address)?
    .run()
    .await
}
