use rescuedogs_mcp_server::McpServer;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Serve MCP on stdin/stdout until the client closes stdin, Ctrl+C, or
/// `shutdown` is cancelled.
pub async fn start_stdio_server(
    server: Arc<McpServer>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    tokio::select! {
        result = server.run_stdio() => {
            result?;
            info!("Client closed stdin");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Interrupt received, shutting down");
        }
        _ = shutdown.cancelled() => {
            info!("Shutdown requested");
        }
    }
    Ok(())
}
