// src/bin/messari_cli.rs
use messari_mcp_client::tools::{
    asset::AssetDetailsTool, research::ResearchTool, trending::TrendingDetailsTool,
};
use messari_mcp_client::tool::{Tool, ToolResult};
use messari_mcp_client::MessariError;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde_json::json;

#[derive(Parser)]
#[command(name = "messari-cli")]
#[command(about = "Messari MCP Rust CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the AI research endpoint a free-text question
    Research { message: String },
    /// Fetch flattened details for an asset slug
    Asset { slug: String },
    /// Fetch trending topics for comma-separated classes
    Trending { classes: String },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Research { message } => {
            let result = ResearchTool.execute(json!({ "message": message })).await;
            handle_result(result);
        }
        Commands::Asset { slug } => {
            let result = AssetDetailsTool.execute(json!({ "slug": slug })).await;
            handle_result(result);
        }
        Commands::Trending { classes } => {
            let result = TrendingDetailsTool
                .execute(json!({ "classes": classes }))
                .await;
            handle_result(result);
        }
    }
}

fn handle_result(result: Result<ToolResult, MessariError>) {
    match result {
        Ok(tool_result) => {
            for content in &tool_result.content {
                println!("{}", content.text);
            }
            if let Some(raw_value) = &tool_result.raw_value {
                println!("\n🔧 Raw Response Data:");
                println!("{:#}", raw_value);
            }
        }
        Err(e) => {
            eprintln!("❌ Tool execution failed: {}", e);
            std::process::exit(1);
        }
    }
}
