//! Sizewise
//!
//! An MCP server recommending clothing sizes from body measurements.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use sizewise::build_info;
use sizewise::mcp::SizewiseService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sizewise=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = SizewiseService::new();

    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("Sizewise MCP server ready");

    server.waiting().await?;

    Ok(())
}
